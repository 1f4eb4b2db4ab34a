#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            message: message.into(),
        }
    }
}

pub enum ErrorCode {
    SyntaxError = 2,
    MissingOperand = 22,
    InternalError = 51,
    FileNotFound = 53,
    DiskIoError = 57,
    BadConfig = 70,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            22 => "MISSING OPERAND",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            57 => "DISK I/O ERROR",
            70 => "BAD CONFIGURATION",
            _ => "",
        };
        if code_str.is_empty() {
            if self.message.is_empty() {
                write!(f, "PROGRAM ERROR {}", self.code)
            } else {
                write!(f, "PROGRAM ERROR {}; {}", self.code, self.message)
            }
        } else if self.message.is_empty() {
            write!(f, "{}", code_str)
        } else {
            write!(f, "{}; {}", code_str, self.message)
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain() {
        assert_eq!(error!(FileNotFound).to_string(), "FILE NOT FOUND");
    }

    #[test]
    fn test_display_message() {
        let e = error!(SyntaxError; "EXPECTED FILE NAME");
        assert_eq!(e.to_string(), "SYNTAX ERROR; EXPECTED FILE NAME");
        assert_eq!(e.code(), 2);
    }
}
