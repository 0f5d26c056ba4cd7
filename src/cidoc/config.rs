//! Mapping configuration shared by the entity drivers.

use serde::{Deserialize, Serialize};

use super::affiliations::AffiliationOptions;
use super::appellations::AppellationOptions;
use super::coordinates::CoordinateOptions;
use super::error::ConfigError;
use super::events::{BirthDeathOptions, EventOptions, LifeEventKind};
use super::identifiers::IdentifierOptions;
use super::occupations::OccupationOptions;
use super::spatial::SpatialOptions;
use super::uri::UriFactory;

/// Base URI for entity and place references.
pub const DEFAULT_DOMAIN: &str = "https://example.org/";
/// Base URI of the type vocabulary.
pub const DEFAULT_TYPE_DOMAIN: &str = "https://example.org/types/";
/// Language tag for names and labels without `xml:lang`.
pub const DEFAULT_LANG: &str = "de";

/// Everything the entity drivers need to map one project's TEI.
///
/// `domain`, `type_domain` and `default_lang` are shared: they override the
/// copies held by the per-mapper sections whenever a driver builds the
/// options for a mapper, so they only need to be set once.
///
/// ```
/// use teicidoc::cidoc::MappingConfig;
///
/// let config = MappingConfig::from_json(
///     r#"{"domain": "https://sk.acdh.oeaw.ac.at/", "coordinates": {"inverse": true}}"#,
/// )
/// .unwrap();
/// assert!(config.coordinate_options().inverse);
/// assert_eq!(config.default_lang, "de");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    pub domain: String,
    pub type_domain: String,
    pub default_lang: String,
    /// Version segment used when minting entity URIs.
    pub version: String,
    pub appellations: AppellationOptions,
    pub identifiers: IdentifierOptions,
    pub coordinates: CoordinateOptions,
    pub birth: BirthDeathOptions,
    pub death: BirthDeathOptions,
    pub events: EventOptions,
    pub occupations: OccupationOptions,
    pub affiliations: AffiliationOptions,
    pub spatial: SpatialOptions,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            type_domain: DEFAULT_TYPE_DOMAIN.to_string(),
            default_lang: DEFAULT_LANG.to_string(),
            version: String::new(),
            appellations: AppellationOptions::default(),
            identifiers: IdentifierOptions::default(),
            coordinates: CoordinateOptions::default(),
            birth: BirthDeathOptions::new(LifeEventKind::Birth),
            death: BirthDeathOptions::new(LifeEventKind::Death),
            events: EventOptions::default(),
            occupations: OccupationOptions::default(),
            affiliations: AffiliationOptions::default(),
            spatial: SpatialOptions::default(),
        }
    }
}

impl MappingConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MappingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects blank shared fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("domain", &self.domain),
            ("type_domain", &self.type_domain),
            ("default_lang", &self.default_lang),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
        }
        Ok(())
    }

    pub fn uri_factory(&self) -> UriFactory {
        UriFactory::new(&self.domain, &self.version)
    }

    pub fn appellation_options(&self) -> AppellationOptions {
        AppellationOptions {
            type_domain: self.type_domain.clone(),
            default_lang: self.default_lang.clone(),
            ..self.appellations.clone()
        }
    }

    pub fn identifier_options(&self) -> IdentifierOptions {
        IdentifierOptions {
            type_domain: self.type_domain.clone(),
            default_lang: self.default_lang.clone(),
            ..self.identifiers.clone()
        }
    }

    pub fn coordinate_options(&self) -> CoordinateOptions {
        self.coordinates.clone()
    }

    /// Options for `kind`, taken from the `birth` or `death` section.
    pub fn life_event_options(&self, kind: LifeEventKind) -> BirthDeathOptions {
        let section = match kind {
            LifeEventKind::Birth => &self.birth,
            LifeEventKind::Death => &self.death,
        };
        BirthDeathOptions {
            kind,
            domain: self.domain.clone(),
            default_lang: self.default_lang.clone(),
            ..section.clone()
        }
    }

    pub fn event_options(&self) -> EventOptions {
        EventOptions {
            domain: self.domain.clone(),
            type_domain: self.type_domain.clone(),
            default_lang: self.default_lang.clone(),
            ..self.events.clone()
        }
    }

    pub fn occupation_options(&self) -> OccupationOptions {
        OccupationOptions {
            default_lang: self.default_lang.clone(),
            ..self.occupations.clone()
        }
    }

    pub fn affiliation_options(&self) -> AffiliationOptions {
        AffiliationOptions {
            domain: self.domain.clone(),
            ..self.affiliations.clone()
        }
    }

    pub fn spatial_options(&self) -> SpatialOptions {
        SpatialOptions {
            domain: self.domain.clone(),
            ..self.spatial.clone()
        }
    }
}
