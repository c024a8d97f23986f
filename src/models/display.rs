//! Brace-delimited field rendering shared by all model types
//!
//! Renders `{Name: value,Other: value}` with populated fields in declared
//! order. Absent optionals and empty collections are skipped entirely.

use std::collections::HashMap;
use std::fmt;

/// Incremental writer for the `{Field: value,...}` rendering.
///
/// Each model type's `Display` impl opens a writer, pushes its fields in
/// declared order, and finishes. Separators are inserted between rendered
/// fields only, so skipped fields never leave a dangling comma.
pub(crate) struct FieldDisplay<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl<'a, 'b> FieldDisplay<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, first: true })
    }

    fn sep(&mut self) -> fmt::Result {
        if self.first {
            self.first = false;
            Ok(())
        } else {
            self.f.write_str(",")
        }
    }

    /// Render a required field.
    pub(crate) fn field(&mut self, name: &str, value: &impl fmt::Display) -> fmt::Result {
        self.sep()?;
        write!(self.f, "{}: {}", name, value)
    }

    /// Render an optional field, skipping `None`.
    pub(crate) fn opt(&mut self, name: &str, value: Option<&impl fmt::Display>) -> fmt::Result {
        match value {
            Some(v) => self.field(name, v),
            None => Ok(()),
        }
    }

    /// Render a list field as `Name: [a, b]`, skipping empty lists.
    pub(crate) fn list(&mut self, name: &str, values: &[impl fmt::Display]) -> fmt::Result {
        if values.is_empty() {
            return Ok(());
        }
        self.sep()?;
        write!(self.f, "{}: [", name)?;
        for (i, v) in values.iter().enumerate() {
            if i > 0 {
                self.f.write_str(", ")?;
            }
            write!(self.f, "{}", v)?;
        }
        self.f.write_str("]")
    }

    /// Render a property bag as `Name: {k=v, k=v}`, skipping empty maps.
    ///
    /// Keys are sorted so the rendering is deterministic.
    pub(crate) fn map(&mut self, name: &str, values: &HashMap<String, String>) -> fmt::Result {
        if values.is_empty() {
            return Ok(());
        }
        self.sep()?;
        write!(self.f, "{}: {{", name)?;
        let mut keys: Vec<&String> = values.keys().collect();
        keys.sort();
        for (i, k) in keys.into_iter().enumerate() {
            if i > 0 {
                self.f.write_str(", ")?;
            }
            write!(self.f, "{}={}", k, values[k])?;
        }
        self.f.write_str("}")
    }

    pub(crate) fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: String,
        description: Option<String>,
        tags: Vec<String>,
        parameters: HashMap<String, String>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut d = FieldDisplay::new(f)?;
            d.field("Name", &self.name)?;
            d.opt("Description", self.description.as_ref())?;
            d.list("Tags", &self.tags)?;
            d.map("Parameters", &self.parameters)?;
            d.finish()
        }
    }

    #[test]
    fn test_skips_absent_fields() {
        let s = Sample {
            name: "sales_db".to_string(),
            description: Some("quarterly sales".to_string()),
            tags: Vec::new(),
            parameters: HashMap::new(),
        };
        assert_eq!(s.to_string(), "{Name: sales_db,Description: quarterly sales}");
    }

    #[test]
    fn test_map_keys_sorted() {
        let mut parameters = HashMap::new();
        parameters.insert("zone".to_string(), "eu".to_string());
        parameters.insert("owner".to_string(), "etl".to_string());
        let s = Sample {
            name: "t".to_string(),
            description: None,
            tags: vec!["a".to_string(), "b".to_string()],
            parameters,
        };
        assert_eq!(s.to_string(), "{Name: t,Tags: [a, b],Parameters: {owner=etl, zone=eu}}");
    }
}
