//! Minimal polymorphic-computation fixture.

/// Shared helper used by every [`Computable`] variant.
pub fn helper() -> i32 {
    42
}

/// Polymorphic computation capability.
pub trait Computable {
    fn value(&self) -> i32;
}

/// Base variant: captures the helper output at construction time.
#[derive(Debug, Clone)]
pub struct Base {
    field: i32,
}

impl Base {
    pub fn new() -> Self {
        Self { field: helper() }
    }
}

impl Default for Base {
    fn default() -> Self {
        Self::new()
    }
}

impl Computable for Base {
    fn value(&self) -> i32 {
        self.field
    }
}

/// Child variant: re-runs the shared helper, then delegates to the base.
#[derive(Debug, Clone, Default)]
pub struct Child {
    base: Base,
}

impl Child {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Computable for Child {
    fn value(&self) -> i32 {
        let check = helper();
        tracing::debug!(check, "child re-ran shared helper");
        self.base.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_value() {
        assert_eq!(helper(), 42);
    }

    #[test]
    fn test_base_seeded_from_helper() {
        assert_eq!(Base::new().value(), 42);
    }

    #[test]
    fn test_child_delegates_to_base() {
        assert_eq!(Child::new().value(), 42);
    }

    #[test]
    fn test_dynamic_dispatch_over_variants() {
        let variants: Vec<Box<dyn Computable>> =
            vec![Box::new(Base::new()), Box::new(Child::new())];
        for variant in &variants {
            assert_eq!(variant.value(), 42);
        }
    }
}
