/// The remote type tag of a field (`"currency"`, `"location"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WireType {
    Boolean,
    Currency,
    Date,
    DateTime,
    Double,
    Id,
    Int,

    /// Geolocation compound field. Cannot be selected in a flat field list.
    Location,
    Percent,
    Reference,
    String,

    /// Any tag without special handling, preserved as received.
    Other(String),
}

impl WireType {
    pub fn from_tag(tag: &str) -> WireType {
        match tag {
            "boolean" => WireType::Boolean,
            "currency" => WireType::Currency,
            "date" => WireType::Date,
            "datetime" => WireType::DateTime,
            "double" => WireType::Double,
            "id" => WireType::Id,
            "int" => WireType::Int,
            "location" => WireType::Location,
            "percent" => WireType::Percent,
            "reference" => WireType::Reference,
            "string" | "" => WireType::String,
            other => WireType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            WireType::Boolean => "boolean",
            WireType::Currency => "currency",
            WireType::Date => "date",
            WireType::DateTime => "datetime",
            WireType::Double => "double",
            WireType::Id => "id",
            WireType::Int => "int",
            WireType::Location => "location",
            WireType::Percent => "percent",
            WireType::Reference => "reference",
            WireType::String => "string",
            WireType::Other(tag) => tag,
        }
    }

    pub fn is_geolocation(&self) -> bool {
        matches!(self, WireType::Location)
    }
}

impl core::fmt::Display for WireType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
