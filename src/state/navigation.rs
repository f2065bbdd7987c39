//! Navigation types.

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Form,
    Acknowledgment,
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view() {
        assert_eq!(View::Form, View::Form);
        assert_ne!(View::Acknowledgment, View::Summary);
    }
}
