//! Diagnostic rendering of value objects.

use core::fmt;

use crate::value_object::ModelValue;

/// Writes `{Name: value,Other: value}` for the fields that are present.
///
/// Modelled on `fmt::DebugStruct`: chain `field` calls in declaration order and
/// close with `finish`. Absent fields are skipped entirely.
pub struct FieldRenderer<'a, 'b: 'a> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b: 'a> FieldRenderer<'a, 'b> {
    pub fn new(fmt: &'a mut fmt::Formatter<'b>) -> Self {
        let result = fmt.write_str("{");
        Self {
            fmt,
            result,
            has_fields: false,
        }
    }

    pub fn field<T: ModelValue + ?Sized>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if self.result.is_err() {
            return self;
        }
        if let Some(value) = value {
            self.result = self.write_field(name, value);
            self.has_fields = true;
        }
        self
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.fmt.write_str("}")
    }

    fn write_field<T: ModelValue + ?Sized>(&mut self, name: &str, value: &T) -> fmt::Result {
        if self.has_fields {
            self.fmt.write_str(",")?;
        }
        self.fmt.write_str(name)?;
        self.fmt.write_str(": ")?;
        value.render(self.fmt)
    }
}

/// Adapts a `ModelValue` to `Display`.
pub struct Rendered<'a, T: ?Sized>(pub &'a T);

impl<T: ModelValue + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}
