use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("Invalid coordinate: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("Attribute {attribute} of {species} out of range: {value}")]
    InvalidAttribute {
        species: String,
        attribute: &'static str,
        value: u8,
    },

    #[error("Duplicate id in catalog: {0}")]
    DuplicateId(String),

    #[error("Species not found: {0}")]
    UnknownSpecies(String),

    #[error("Site not found: {0}")]
    UnknownSite(String),

    #[error("No coordinate known for place: {0}")]
    UnknownPlace(String),

    #[error("A species cannot fight itself: {0}")]
    SameFighter(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AtlasError>;
