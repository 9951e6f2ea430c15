use crate::PermalinkError;

/// The validated command line arguments: a path candidate,
/// and an optional line spec such as `"12"` or `"12-30"`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub path: String,
    /// Empty when no line spec was given. Not validated as numbers.
    pub line_spec: String,
}

impl Invocation {
    /// Split `args` into a path and a line spec.
    /// ```
    /// use kokodoko::Invocation;
    ///
    /// let invocation = Invocation::from_args(&["main.rs", "12-30"]).unwrap();
    /// assert_eq!(invocation.path, "main.rs");
    /// assert_eq!(invocation.line_spec, "12-30");
    /// assert!(Invocation::from_args::<&str>(&[]).is_err());
    /// ```
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, PermalinkError> {
        match args {
            [] => Err(PermalinkError::Argument(
                r#"no path given, did you mean "."?"#.to_string(),
            )),
            [path] => Ok(Self {
                path: path.as_ref().to_string(),
                line_spec: String::new(),
            }),
            [path, line_spec] => Ok(Self {
                path: path.as_ref().to_string(),
                line_spec: line_spec.as_ref().to_string(),
            }),
            _ => Err(PermalinkError::Argument(
                "at most two arguments expected".to_string(),
            )),
        }
    }

    pub fn has_line_spec(&self) -> bool {
        !self.line_spec.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_only() {
        let invocation = Invocation::from_args(&["./src"]).unwrap();
        assert_eq!(invocation.path, "./src");
        assert!(!invocation.has_line_spec());
    }

    #[test]
    fn line_spec_is_not_validated() {
        let invocation = Invocation::from_args(&["a.rs", "not-a-number"]).unwrap();
        assert_eq!(invocation.line_spec, "not-a-number");
        assert!(invocation.has_line_spec());
    }

    #[test]
    fn argument_count() {
        let none: [&str; 0] = [];
        assert!(matches!(
            Invocation::from_args(&none),
            Err(PermalinkError::Argument(_))
        ));
        assert!(matches!(
            Invocation::from_args(&["foo", "bar", "baz"]),
            Err(PermalinkError::Argument(_))
        ));
    }
}
