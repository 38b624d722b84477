/// A seeded lookup row that requirements point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupRef {
    RequirementType(i32),
    Category(i32),
    Priority(i32),
}

impl LookupRef {
    pub fn kind(&self) -> &'static str {
        match self {
            LookupRef::RequirementType(_) => "Requirement type",
            LookupRef::Category(_) => "Category",
            LookupRef::Priority(_) => "Priority",
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            LookupRef::RequirementType(id) | LookupRef::Category(id) | LookupRef::Priority(id) => {
                *id
            }
        }
    }
}
