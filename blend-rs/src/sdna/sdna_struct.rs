/// A structure definition from the SDNA `STRC` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdnaStruct {
    /// Index into the type table naming this structure.
    pub type_index: u16,
    /// The structure's members, in declaration order.
    pub fields: Vec<SdnaField>,
}

/// One member of an [`SdnaStruct`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdnaField {
    /// Index into the type table.
    pub type_index: u16,
    /// Index into the name table. Names carry pointer and array decoration, e.g. `*next` or `co[3]`.
    pub name_index: u16,
}

/// A field with its indices looked up in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedField<'a> {
    pub type_name: &'a str,
    pub type_size: u16,
    pub name: &'a str,
}
