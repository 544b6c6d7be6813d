//! Class lists returned by class-filtering hooks.

/// Value returned by class-list hooks: a single class or a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassList {
    One(String),
    Many(Vec<String>),
}

impl ClassList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(class) => vec![class],
            Self::Many(classes) => classes,
        }
    }
}

impl From<String> for ClassList {
    fn from(class: String) -> Self {
        Self::One(class)
    }
}

impl From<&str> for ClassList {
    fn from(class: &str) -> Self {
        Self::One(class.to_owned())
    }
}

impl From<Vec<String>> for ClassList {
    fn from(classes: Vec<String>) -> Self {
        Self::Many(classes)
    }
}

impl From<Vec<&str>> for ClassList {
    fn from(classes: Vec<&str>) -> Self {
        Self::Many(classes.into_iter().map(str::to_owned).collect())
    }
}
