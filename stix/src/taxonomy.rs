//! Closed enumerations of the platform's internal type identifiers, and their mapping to STIX 2.1 object types.
//!
//! Every internal type belongs to exactly one [`StixCategory`]. Identifiers outside every enumeration are unclassified
//! and cannot be converted.

use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Internal type identifier of a sighting.
pub const STIX_SIGHTING_RELATIONSHIP: &str = "stix-sighting-relationship";

/// Internal types of STIX Domain Objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString, StrumDisplay)]
pub enum DomainType {
    // Identities
    Individual,
    Organization,
    Sector,
    System,
    // Locations
    City,
    Country,
    Region,
    Position,
    Incident,
    Campaign,
    Tool,
    Vulnerability,
    #[strum(serialize = "Threat-Actor")]
    ThreatActor,
    Infrastructure,
    #[strum(serialize = "Intrusion-Set")]
    IntrusionSet,
    Indicator,
    #[strum(serialize = "Course-Of-Action")]
    CourseOfAction,
    Malware,
    #[strum(serialize = "Attack-Pattern")]
    AttackPattern,
    Report,
    Note,
    #[strum(serialize = "Observed-Data")]
    ObservedData,
    Opinion,
}

impl DomainType {
    /// Whether this type is projected as a STIX `identity`
    pub fn is_identity(&self) -> bool {
        matches!(
            self,
            DomainType::Individual
                | DomainType::Organization
                | DomainType::Sector
                | DomainType::System
        )
    }

    /// Whether this type is projected as a STIX `location`
    pub fn is_location(&self) -> bool {
        matches!(
            self,
            DomainType::City | DomainType::Country | DomainType::Region | DomainType::Position
        )
    }
}

/// Internal types of STIX Cyber-observable Objects.
///
/// Some of these have no STIX 2.1 counterpart (wallets, keys, hostnames, text, registry values, MIME parts) and are
/// emitted as custom observables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString, StrumDisplay)]
pub enum ObservableType {
    Artifact,
    #[strum(serialize = "Autonomous-System")]
    AutonomousSystem,
    #[strum(serialize = "Cryptocurrency-Wallet")]
    CryptocurrencyWallet,
    #[strum(serialize = "Cryptographic-Key")]
    CryptographicKey,
    Directory,
    #[strum(serialize = "Domain-Name")]
    DomainName,
    #[strum(serialize = "Email-Addr")]
    EmailAddr,
    #[strum(serialize = "Email-Message")]
    EmailMessage,
    #[strum(serialize = "Email-Mime-Part-Type")]
    EmailMimePartType,
    StixFile,
    Hostname,
    #[strum(serialize = "IPv4-Addr")]
    Ipv4Addr,
    #[strum(serialize = "IPv6-Addr")]
    Ipv6Addr,
    #[strum(serialize = "Mac-Addr")]
    MacAddr,
    Mutex,
    #[strum(serialize = "Network-Traffic")]
    NetworkTraffic,
    Process,
    Software,
    Text,
    Url,
    #[strum(serialize = "User-Account")]
    UserAccount,
    #[strum(serialize = "Windows-Registry-Key")]
    WindowsRegistryKey,
    #[strum(serialize = "Windows-Registry-Value-Type")]
    WindowsRegistryValueType,
    #[strum(serialize = "X509-Certificate")]
    X509Certificate,
}

/// Internal types of STIX Meta Objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString, StrumDisplay)]
pub enum MetaType {
    #[strum(serialize = "Marking-Definition")]
    MarkingDefinition,
    Label,
    #[strum(serialize = "Kill-Chain-Phase")]
    KillChainPhase,
    #[strum(serialize = "External-Reference")]
    ExternalReference,
}

/// Relationship verbs between core objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString, StrumDisplay)]
#[strum(serialize_all = "kebab-case")]
pub enum CoreRelationshipType {
    AnalysisOf,
    AttributedTo,
    AuthoredBy,
    BasedOn,
    BeaconsTo,
    BelongsTo,
    Characterizes,
    CommunicatesWith,
    Compromises,
    ConsistsOf,
    Controls,
    Delivers,
    DerivedFrom,
    Downloads,
    Drops,
    DuplicateOf,
    DynamicAnalysisOf,
    ExfiltratesTo,
    Exploits,
    Has,
    Hosts,
    Impersonates,
    Indicates,
    Investigates,
    LocatedAt,
    Mitigates,
    OriginatesFrom,
    Owns,
    PartOf,
    RelatedTo,
    Remediates,
    ResolvesTo,
    RevokedBy,
    StaticAnalysisOf,
    SubtechniqueOf,
    Targets,
    Uses,
    VariantOf,
}

/// Relationship verbs linking observables to other observables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString, StrumDisplay)]
#[strum(serialize_all = "kebab-case")]
pub enum ObservableRelationshipType {
    OperatingSystem,
    Sample,
    Contains,
    #[strum(serialize = "obs_resolves-to")]
    ResolvesTo,
    #[strum(serialize = "obs_belongs-to")]
    BelongsTo,
    From,
    Sender,
    To,
    Cc,
    Bcc,
    RawEmail,
    BodyRaw,
    BodyMultipart,
    ParentDirectory,
    #[strum(serialize = "obs_content")]
    Content,
    Src,
    Dst,
    SrcPayload,
    DstPayload,
    Encapsulates,
    EncapsulatedBy,
    OpenedConnection,
    CreatorUser,
    Image,
    Parent,
    Child,
    Values,
    #[strum(serialize = "x_opencti_linked-to")]
    LinkedTo,
}

/// Relationship verbs linking an object to its meta objects and contained objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString, StrumDisplay)]
#[strum(serialize_all = "kebab-case")]
pub enum MetaRelationshipType {
    Object,
    ObjectMarking,
    CreatedBy,
    ObjectLabel,
    ExternalReference,
    KillChainPhase,
}

/// The category an internal type identifier falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StixCategory {
    DomainObject(DomainType),
    CyberObservable(ObservableType),
    CoreRelationship(CoreRelationshipType),
    CyberObservableRelationship(ObservableRelationshipType),
    SightingRelationship,
    MetaRelationship(MetaRelationshipType),
    MetaObject(MetaType),
}

impl StixCategory {
    /// Whether the category is relationship-shaped, and so requires resolved endpoints
    pub fn is_relationship(&self) -> bool {
        matches!(
            self,
            StixCategory::CoreRelationship(_)
                | StixCategory::CyberObservableRelationship(_)
                | StixCategory::SightingRelationship
                | StixCategory::MetaRelationship(_)
        )
    }
}

/// Classifies an internal type identifier. Returns `None` for unclassified identifiers.
pub fn classify(entity_type: &str) -> Option<StixCategory> {
    if let Ok(domain_type) = DomainType::from_str(entity_type) {
        return Some(StixCategory::DomainObject(domain_type));
    }
    if let Ok(observable_type) = ObservableType::from_str(entity_type) {
        return Some(StixCategory::CyberObservable(observable_type));
    }
    if let Ok(meta_type) = MetaType::from_str(entity_type) {
        return Some(StixCategory::MetaObject(meta_type));
    }
    if let Ok(relationship_type) = CoreRelationshipType::from_str(entity_type) {
        return Some(StixCategory::CoreRelationship(relationship_type));
    }
    if let Ok(relationship_type) = ObservableRelationshipType::from_str(entity_type) {
        return Some(StixCategory::CyberObservableRelationship(relationship_type));
    }
    if let Ok(relationship_type) = MetaRelationshipType::from_str(entity_type) {
        return Some(StixCategory::MetaRelationship(relationship_type));
    }
    if entity_type == STIX_SIGHTING_RELATIONSHIP {
        return Some(StixCategory::SightingRelationship);
    }
    None
}

pub fn is_identity(entity_type: &str) -> bool {
    DomainType::from_str(entity_type).is_ok_and(|domain_type| domain_type.is_identity())
}

pub fn is_location(entity_type: &str) -> bool {
    DomainType::from_str(entity_type).is_ok_and(|domain_type| domain_type.is_location())
}

pub fn is_stix_sighting_relationship(entity_type: &str) -> bool {
    entity_type == STIX_SIGHTING_RELATIONSHIP
}

/// Whether the type is any kind of relationship, sightings included
pub fn is_stix_relationship(entity_type: &str) -> bool {
    classify(entity_type).is_some_and(|category| category.is_relationship())
}

/// Maps an internal type identifier to the STIX `type` discriminator of its projection.
pub fn convert_type_to_stix_type(entity_type: &str) -> String {
    match classify(entity_type) {
        Some(StixCategory::DomainObject(domain_type)) if domain_type.is_identity() => {
            "identity".to_string()
        }
        Some(StixCategory::DomainObject(domain_type)) if domain_type.is_location() => {
            "location".to_string()
        }
        Some(StixCategory::CyberObservable(ObservableType::StixFile)) => "file".to_string(),
        Some(
            StixCategory::CoreRelationship(_)
            | StixCategory::CyberObservableRelationship(_)
            | StixCategory::MetaRelationship(_),
        ) => "relationship".to_string(),
        Some(StixCategory::SightingRelationship) => "sighting".to_string(),
        _ => entity_type.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use crate::taxonomy::{
        classify, convert_type_to_stix_type, is_identity, is_location, is_stix_relationship,
        CoreRelationshipType, DomainType, MetaRelationshipType, MetaType,
        ObservableRelationshipType, ObservableType, StixCategory,
    };
    use std::collections::HashSet;
    use strum::IntoEnumIterator;
    use test_log::test;

    fn all_internal_types() -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        types.extend(DomainType::iter().map(|t| t.to_string()));
        types.extend(ObservableType::iter().map(|t| t.to_string()));
        types.extend(MetaType::iter().map(|t| t.to_string()));
        types.extend(CoreRelationshipType::iter().map(|t| t.to_string()));
        types.extend(ObservableRelationshipType::iter().map(|t| t.to_string()));
        types.extend(MetaRelationshipType::iter().map(|t| t.to_string()));
        types.push("stix-sighting-relationship".to_string());
        types
    }

    #[test]
    fn taxonomies_are_disjoint() {
        let types = all_internal_types();
        let unique: HashSet<&String> = types.iter().collect();
        assert_eq!(types.len(), unique.len());
    }

    #[test]
    fn every_internal_type_is_classified_in_its_own_enumeration() {
        for domain_type in DomainType::iter() {
            assert_eq!(
                classify(domain_type.as_ref()),
                Some(StixCategory::DomainObject(domain_type))
            );
        }
        for observable_type in ObservableType::iter() {
            assert_eq!(
                classify(observable_type.as_ref()),
                Some(StixCategory::CyberObservable(observable_type))
            );
        }
        for relationship_type in ObservableRelationshipType::iter() {
            assert_eq!(
                classify(relationship_type.as_ref()),
                Some(StixCategory::CyberObservableRelationship(relationship_type))
            );
        }
    }

    #[test]
    fn unknown_types_are_unclassified() {
        assert_eq!(classify("Grouping"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("threat-actor"), None);
    }

    #[test]
    fn identity_and_location_refinements() {
        assert!(is_identity("Organization"));
        assert!(is_identity("System"));
        assert!(!is_identity("City"));
        assert!(is_location("Position"));
        assert!(!is_location("Malware"));
        assert!(!is_location("Unknown"));
    }

    #[test]
    fn relationship_predicates() {
        assert!(is_stix_relationship("uses"));
        assert!(is_stix_relationship("obs_resolves-to"));
        assert!(is_stix_relationship("object-marking"));
        assert!(is_stix_relationship("stix-sighting-relationship"));
        assert!(!is_stix_relationship("Indicator"));
    }

    #[test]
    fn stix_type_mapping() {
        assert_eq!(convert_type_to_stix_type("Individual"), "identity");
        assert_eq!(convert_type_to_stix_type("Country"), "location");
        assert_eq!(convert_type_to_stix_type("StixFile"), "file");
        assert_eq!(convert_type_to_stix_type("targets"), "relationship");
        assert_eq!(convert_type_to_stix_type("obs_content"), "relationship");
        assert_eq!(convert_type_to_stix_type("created-by"), "relationship");
        assert_eq!(
            convert_type_to_stix_type("stix-sighting-relationship"),
            "sighting"
        );
        assert_eq!(convert_type_to_stix_type("IPv4-Addr"), "ipv4-addr");
        assert_eq!(
            convert_type_to_stix_type("Course-Of-Action"),
            "course-of-action"
        );
        assert_eq!(
            convert_type_to_stix_type("Marking-Definition"),
            "marking-definition"
        );
        assert_eq!(convert_type_to_stix_type("Unknown-Thing"), "unknown-thing");
    }
}
