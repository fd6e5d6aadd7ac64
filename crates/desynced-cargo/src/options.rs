//! Per-field options controlling how a field is flattened into Cargo lines.
//!
//! Options are attached to fields when a [`RecordDescriptor`] is built and are
//! copied into the analyzed [`TypeInfo`] tree. They carry no behavior of their
//! own; the analyzer validates them and the printer reads them.
//!
//! [`RecordDescriptor`]: crate::RecordDescriptor
//! [`TypeInfo`]: crate::TypeInfo

/// Options shared by every field kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Replaces the declared field name in every rendered key.
    pub name_override: Option<String>,
    /// Drops the field (and everything below it) from all output.
    pub skip_field: bool,
}

impl FieldOptions {
    /// Options for a field rendered under a different name.
    pub fn renamed(name: impl Into<String>) -> Self {
        Self {
            name_override: Some(name.into()),
            skip_field: false,
        }
    }

    /// Options for a field excluded from the table.
    pub fn skipped() -> Self {
        Self {
            name_override: None,
            skip_field: true,
        }
    }
}

/// Options for a nested record field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFieldOptions {
    pub field: FieldOptions,
    /// Prefix every sub-field key with this field's name and `_`.
    pub prefix_name: bool,
}

impl RecordFieldOptions {
    /// Options for a record whose sub-fields are prefixed with the field name.
    pub fn prefixed() -> Self {
        Self {
            field: FieldOptions::default(),
            prefix_name: true,
        }
    }

    /// Use `name` instead of the field name (also as the prefix).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.field.name_override = Some(name.into());
        self
    }

    /// Exclude the record field entirely.
    pub fn skip(mut self) -> Self {
        self.field.skip_field = true;
        self
    }
}

/// Options for a list field.
///
/// A list is always rendered as exactly `max_length` slots, so the length is
/// mandatory: `max_length == 0` means "not configured" and is rejected when
/// the schema is analyzed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFieldOptions {
    pub field: FieldOptions,
    /// Number of slots exported to the wiki.
    pub max_length: usize,
    /// Do not number the slots.
    pub skip_suffix: bool,
    /// Options applied to each element when the element is a record.
    pub record_options: RecordFieldOptions,
    /// Options of the inner list when the element is itself a list.
    pub element: Option<Box<ListFieldOptions>>,
}

impl ListFieldOptions {
    /// List options with the given number of slots.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            ..Self::default()
        }
    }

    /// Use `name` instead of the field name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.field.name_override = Some(name.into());
        self
    }

    /// Exclude the list field entirely.
    pub fn skip(mut self) -> Self {
        self.field.skip_field = true;
        self
    }

    /// Do not append slot numbers to the keys.
    pub fn without_suffix(mut self) -> Self {
        self.skip_suffix = true;
        self
    }

    /// Prefix the keys of record elements with the list's name.
    pub fn prefixed(mut self) -> Self {
        self.record_options.prefix_name = true;
        self
    }

    /// Options for record elements.
    pub fn with_record_options(mut self, options: RecordFieldOptions) -> Self {
        self.record_options = options;
        self
    }

    /// Options for the inner list of a list of lists.
    pub fn with_element(mut self, element: ListFieldOptions) -> Self {
        self.element = Some(Box::new(element));
        self
    }
}

/// The options attached to a field declaration.
///
/// Which variant is valid depends on the field's type; the analyzer rejects
/// mismatches (for example list options on a scalar field).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldAnnotation {
    /// No options declared; defaults apply.
    #[default]
    None,
    Field(FieldOptions),
    List(ListFieldOptions),
    Record(RecordFieldOptions),
}

impl FieldAnnotation {
    /// Short name of the annotation kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Field(_) => "FieldOptions",
            Self::List(_) => "ListFieldOptions",
            Self::Record(_) => "RecordFieldOptions",
        }
    }
}

impl From<FieldOptions> for FieldAnnotation {
    fn from(options: FieldOptions) -> Self {
        Self::Field(options)
    }
}

impl From<ListFieldOptions> for FieldAnnotation {
    fn from(options: ListFieldOptions) -> Self {
        Self::List(options)
    }
}

impl From<RecordFieldOptions> for FieldAnnotation {
    fn from(options: RecordFieldOptions) -> Self {
        Self::Record(options)
    }
}
