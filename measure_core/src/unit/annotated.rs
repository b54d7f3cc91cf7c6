use super::Unit;

/// A unit carrying a free-text annotation, e.g. `g{dry}`.
///
/// The annotation does not affect the dimension or convertibility. Annotating
/// an annotated unit replaces the annotation: the last one applied wins.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnnotatedUnit {
    actual: Unit,
    annotation: String,
}

impl AnnotatedUnit {
    pub fn new(actual: &Unit, annotation: impl Into<String>) -> Self {
        let actual = match actual {
            Unit::Annotated(annotated) => annotated.actual.clone(),
            other => other.clone(),
        };
        Self {
            actual,
            annotation: annotation.into(),
        }
    }

    pub fn actual(&self) -> &Unit {
        &self.actual
    }

    pub fn annotation(&self) -> &str {
        &self.annotation
    }
}
