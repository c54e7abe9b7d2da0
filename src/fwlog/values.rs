//! Several operands rendered as one message

use std::fmt;

/// Renders each operand with `Display`, separated by single spaces.
///
/// The `values:` arm of the `fwlog_*!` macros builds one of these, so
/// `fwlog_info!(values: "retry", 3, "of", 5)` logs `retry 3 of 5`.
///
/// ```
/// use fawa::fwlog::Values;
///
/// let message = Values(&[&"listening on", &8080]).to_string();
/// assert_eq!(message, "listening on 8080");
/// ```
#[derive(Clone, Copy)]
pub struct Values<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Values<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Values<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Values").field(&self.to_string()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_space_separated() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let message = Values(&[&"open", &"/etc/app.conf:", &err]).to_string();
        assert_eq!(message, "open /etc/app.conf: no such file");
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(Values(&[]).to_string(), "");
        assert_eq!(Values(&[&42]).to_string(), "42");
    }
}
