//! Contains the projection logic for Stix Domain Objects (SDOs).

use crate::{
    base::{assert_type, kill_chain_phases, refs, DomainCommon, Envelope},
    config::ConverterConfig,
    domain_objects::sdo_types::{
        AttackPattern, Campaign, CourseOfAction, Identity, Incident, Indicator, Infrastructure,
        IntrusionSet, Location, Malware, Note, ObservedData, Opinion, Report, ThreatActor, Tool,
        Vulnerability,
    },
    error::StixError as Error,
    extensions::{
        IdentityExtras, IndicatorExtras, MitreExtension, PlatformExtras, VulnerabilityExtras,
    },
    normalize::normalize_enum,
    object::{StixObject, StixProperties},
    store::StoreObject,
    taxonomy::{is_identity, is_location, DomainType},
    types::ExtensionType,
};
use serde::Serialize;
use strum::AsRefStr;

/// A STIX Domain Object (SDO) of some type.
///
/// Each of SDO type corresponds to a unique concept commonly represented in CTI.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_nrhq5e9nylke>
#[derive(Clone, Debug, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(untagged)]
#[strum(serialize_all = "kebab-case")]
pub enum DomainObject {
    AttackPattern(AttackPattern),
    Campaign(Campaign),
    CourseOfAction(CourseOfAction),
    Identity(Identity),
    Incident(Incident),
    Indicator(Indicator),
    Infrastructure(Infrastructure),
    IntrusionSet(IntrusionSet),
    Location(Location),
    Malware(Malware),
    Note(Note),
    ObservedData(ObservedData),
    Opinion(Opinion),
    Report(Report),
    ThreatActor(ThreatActor),
    Tool(Tool),
    Vulnerability(Vulnerability),
}

normalize_enum!(DomainObject {
    AttackPattern,
    Campaign,
    CourseOfAction,
    Identity,
    Incident,
    Indicator,
    Infrastructure,
    IntrusionSet,
    Location,
    Malware,
    Note,
    ObservedData,
    Opinion,
    Report,
    ThreatActor,
    Tool,
    Vulnerability,
});

/// Projects a domain object instance, according to its internal type
pub fn convert_domain_object(
    instance: &StoreObject,
    domain_type: DomainType,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    match domain_type {
        DomainType::Individual
        | DomainType::Organization
        | DomainType::Sector
        | DomainType::System => convert_identity(instance, config),
        DomainType::City | DomainType::Country | DomainType::Region | DomainType::Position => {
            convert_location(instance, config)
        }
        DomainType::Incident => convert_incident(instance, config),
        DomainType::Campaign => convert_campaign(instance, config),
        DomainType::Tool => convert_tool(instance, config),
        DomainType::Vulnerability => convert_vulnerability(instance, config),
        DomainType::ThreatActor => convert_threat_actor(instance, config),
        DomainType::Infrastructure => convert_infrastructure(instance, config),
        DomainType::IntrusionSet => convert_intrusion_set(instance, config),
        DomainType::Indicator => convert_indicator(instance, config),
        DomainType::CourseOfAction => convert_course_of_action(instance, config),
        DomainType::Malware => convert_malware(instance, config),
        DomainType::AttackPattern => convert_attack_pattern(instance, config),
        DomainType::Report => convert_report(instance, config),
        DomainType::Note => convert_note(instance, config),
        DomainType::ObservedData => convert_observed_data(instance, config),
        DomainType::Opinion => convert_opinion(instance, config),
    }
}

fn domain_object(envelope: Envelope, object: DomainObject) -> StixObject {
    StixObject::new(envelope, StixProperties::Sdo(object))
}

/// Individuals, organizations, sectors and systems are all projected as an `identity`
pub fn convert_identity(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    if !is_identity(&instance.entity_type) {
        return Err(Error::IncompatibleType {
            instance_type: instance.entity_type.clone(),
            expected: "identity".to_string(),
        });
    }
    let attributes = &instance.attributes;
    let envelope = Envelope::new(instance, config).map_extensions(|extensions| {
        extensions.with_platform_extras(PlatformExtras::Identity(IdentityExtras {
            firstname: attributes.x_opencti_firstname.clone(),
            lastname: attributes.x_opencti_lastname.clone(),
            organization_type: attributes.x_opencti_organization_type.clone(),
            reliability: attributes.x_opencti_reliability.clone(),
        }))
    });

    let identity = Identity {
        common: DomainCommon::new(instance),
        name: attributes.name.clone(),
        description: attributes.description.clone(),
        contact_information: attributes.contact_information.clone(),
        identity_class: attributes.identity_class.clone(),
        roles: attributes.roles.clone(),
        sectors: attributes.sectors.clone(),
    };
    Ok(domain_object(envelope, DomainObject::Identity(identity)))
}

/// Cities, countries, regions and positions are all projected as a `location`
pub fn convert_location(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    if !is_location(&instance.entity_type) {
        return Err(Error::IncompatibleType {
            instance_type: instance.entity_type.clone(),
            expected: "location".to_string(),
        });
    }
    let attributes = &instance.attributes;
    let location = Location {
        common: DomainCommon::new(instance),
        name: attributes.name.clone(),
        description: attributes.description.clone(),
        latitude: attributes.latitude,
        longitude: attributes.longitude,
        precision: attributes.precision,
        region: attributes.region.clone(),
        country: attributes.country.clone(),
        administrative_area: attributes.administrative_area.clone(),
        city: attributes.city.clone(),
        street_address: attributes.street_address.clone(),
        postal_code: attributes.postal_code.clone(),
    };
    Ok(domain_object(
        Envelope::new(instance, config),
        DomainObject::Location(location),
    ))
}

/// Incidents are not part of STIX 2.1, so their platform extension declares a new SDO
pub fn convert_incident(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::Incident)?;
    let attributes = &instance.attributes;
    let envelope = Envelope::new(instance, config)
        .map_extensions(|extensions| extensions.with_platform_type(ExtensionType::NewSdo));

    let incident = Incident {
        common: DomainCommon::new(instance),
        name: attributes.name.clone(),
        description: attributes.description.clone(),
        first_seen: attributes.first_seen.clone(),
        last_seen: attributes.last_seen.clone(),
        aliases: attributes.aliases.clone(),
        objective: attributes.objective.clone(),
    };
    Ok(domain_object(envelope, DomainObject::Incident(incident)))
}

pub fn convert_campaign(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::Campaign)?;
    let attributes = &instance.attributes;
    let campaign = Campaign {
        common: DomainCommon::new(instance),
        name: attributes.name.clone(),
        description: attributes.description.clone(),
        aliases: attributes.aliases.clone(),
        first_seen: attributes.first_seen.clone(),
        last_seen: attributes.last_seen.clone(),
        objective: attributes.objective.clone(),
    };
    Ok(domain_object(
        Envelope::new(instance, config),
        DomainObject::Campaign(campaign),
    ))
}

pub fn convert_tool(instance: &StoreObject, config: &ConverterConfig) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::Tool)?;
    let attributes = &instance.attributes;
    let tool = Tool {
        common: DomainCommon::new(instance),
        name: attributes.name.clone(),
        description: attributes.description.clone(),
        tool_types: attributes.tool_types.clone(),
        aliases: attributes.aliases.clone(),
        kill_chain_phases: kill_chain_phases(instance),
        tool_version: attributes.tool_version.clone(),
    };
    Ok(domain_object(
        Envelope::new(instance, config),
        DomainObject::Tool(tool),
    ))
}

/// Vulnerability scoring is carried by the platform extension
pub fn convert_vulnerability(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::Vulnerability)?;
    let attributes = &instance.attributes;
    let envelope = Envelope::new(instance, config).map_extensions(|extensions| {
        extensions.with_platform_extras(PlatformExtras::Vulnerability(VulnerabilityExtras {
            attack_vector: attributes.x_opencti_attack_vector.clone(),
            availability_impact: attributes.x_opencti_availability_impact.clone(),
            base_score: attributes.x_opencti_base_score,
            base_severity: attributes.x_opencti_base_severity.clone(),
            confidentiality_impact: attributes.x_opencti_confidentiality_impact.clone(),
            integrity_impact: attributes.x_opencti_integrity_impact.clone(),
        }))
    });

    let vulnerability = Vulnerability {
        common: DomainCommon::new(instance),
        name: attributes.name.clone(),
        description: attributes.description.clone(),
    };
    Ok(domain_object(
        envelope,
        DomainObject::Vulnerability(vulnerability),
    ))
}

pub fn convert_threat_actor(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::ThreatActor)?;
    let attributes = &instance.attributes;
    let threat_actor = ThreatActor {
        common: DomainCommon::new(instance),
        name: attributes.name.clone(),
        description: attributes.description.clone(),
        threat_actor_types: attributes.threat_actor_types.clone(),
        aliases: attributes.aliases.clone(),
        first_seen: attributes.first_seen.clone(),
        last_seen: attributes.last_seen.clone(),
        roles: attributes.roles.clone(),
        goals: attributes.goals.clone(),
        sophistication: attributes.sophistication.clone(),
        resource_level: attributes.resource_level.clone(),
        primary_motivation: attributes.primary_motivation.clone(),
        secondary_motivations: attributes.secondary_motivations.clone(),
        personal_motivations: attributes.personal_motivations.clone(),
    };
    Ok(domain_object(
        Envelope::new(instance, config),
        DomainObject::ThreatActor(threat_actor),
    ))
}

pub fn convert_infrastructure(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::Infrastructure)?;
    let attributes = &instance.attributes;
    let infrastructure = Infrastructure {
        common: DomainCommon::new(instance),
        name: attributes.name.clone(),
        description: attributes.description.clone(),
        infrastructure_types: attributes.infrastructure_types.clone(),
        aliases: attributes.aliases.clone(),
        kill_chain_phases: kill_chain_phases(instance),
        first_seen: attributes.first_seen.clone(),
        last_seen: attributes.last_seen.clone(),
    };
    Ok(domain_object(
        Envelope::new(instance, config),
        DomainObject::Infrastructure(infrastructure),
    ))
}

pub fn convert_intrusion_set(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::IntrusionSet)?;
    let attributes = &instance.attributes;
    let intrusion_set = IntrusionSet {
        common: DomainCommon::new(instance),
        name: attributes.name.clone(),
        description: attributes.description.clone(),
        aliases: attributes.aliases.clone(),
        first_seen: attributes.first_seen.clone(),
        last_seen: attributes.last_seen.clone(),
        goals: attributes.goals.clone(),
        resource_level: attributes.resource_level.clone(),
        primary_motivation: attributes.primary_motivation.clone(),
        secondary_motivations: attributes.secondary_motivations.clone(),
    };
    Ok(domain_object(
        Envelope::new(instance, config),
        DomainObject::IntrusionSet(intrusion_set),
    ))
}

/// Indicators carry their detection context in the platform extension, and ATT&CK properties in the MITRE extension
pub fn convert_indicator(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::Indicator)?;
    let attributes = &instance.attributes;
    let envelope = Envelope::new(instance, config).map_extensions(|extensions| {
        extensions
            .with_platform_extras(PlatformExtras::Indicator(IndicatorExtras {
                detection: attributes.x_opencti_detection,
                score: attributes.x_opencti_score,
                main_observable_type: attributes.x_opencti_main_observable_type.clone(),
            }))
            .with_mitre(MitreExtension::new(instance))
    });

    let indicator = Indicator {
        common: DomainCommon::new(instance),
        name: attributes.name.clone(),
        description: attributes.description.clone(),
        indicator_types: attributes.indicator_types.clone(),
        pattern: attributes.pattern.clone(),
        pattern_type: attributes.pattern_type.clone(),
        pattern_version: attributes.pattern_version.clone(),
        valid_from: attributes.valid_from.clone(),
        valid_until: attributes.valid_until.clone(),
        kill_chain_phases: kill_chain_phases(instance),
    };
    Ok(domain_object(envelope, DomainObject::Indicator(indicator)))
}

pub fn convert_course_of_action(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::CourseOfAction)?;
    let attributes = &instance.attributes;
    let envelope = Envelope::new(instance, config)
        .map_extensions(|extensions| extensions.with_mitre(MitreExtension::new(instance)));

    let course_of_action = CourseOfAction {
        common: DomainCommon::new(instance),
        name: attributes.name.clone(),
        description: attributes.description.clone(),
    };
    Ok(domain_object(
        envelope,
        DomainObject::CourseOfAction(course_of_action),
    ))
}

pub fn convert_malware(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::Malware)?;
    let attributes = &instance.attributes;
    let relations = &instance.relations;
    let malware = Malware {
        common: DomainCommon::new(instance),
        name: attributes.name.clone(),
        description: attributes.description.clone(),
        malware_types: attributes.malware_types.clone(),
        is_family: attributes.is_family,
        aliases: attributes.aliases.clone(),
        kill_chain_phases: kill_chain_phases(instance),
        first_seen: attributes.first_seen.clone(),
        last_seen: attributes.last_seen.clone(),
        architecture_execution_envs: attributes.architecture_execution_envs.clone(),
        implementation_languages: attributes.implementation_languages.clone(),
        capabilities: attributes.capabilities.clone(),
        operating_system_refs: refs(&relations.operating_system),
        sample_refs: refs(&relations.sample),
    };
    Ok(domain_object(
        Envelope::new(instance, config),
        DomainObject::Malware(malware),
    ))
}

pub fn convert_attack_pattern(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::AttackPattern)?;
    let attributes = &instance.attributes;
    let envelope = Envelope::new(instance, config)
        .map_extensions(|extensions| extensions.with_mitre(MitreExtension::new(instance)));

    let attack_pattern = AttackPattern {
        common: DomainCommon::new(instance),
        name: attributes.name.clone(),
        description: attributes.description.clone(),
        aliases: attributes.aliases.clone(),
        kill_chain_phases: kill_chain_phases(instance),
    };
    Ok(domain_object(
        envelope,
        DomainObject::AttackPattern(attack_pattern),
    ))
}

pub fn convert_report(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::Report)?;
    let attributes = &instance.attributes;
    let report = Report {
        common: DomainCommon::new(instance),
        name: attributes.name.clone(),
        description: attributes.description.clone(),
        report_types: attributes.report_types.clone(),
        published: attributes.published.clone(),
        object_refs: refs(&instance.relations.objects),
    };
    Ok(domain_object(
        Envelope::new(instance, config),
        DomainObject::Report(report),
    ))
}

pub fn convert_note(instance: &StoreObject, config: &ConverterConfig) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::Note)?;
    let attributes = &instance.attributes;
    let note = Note {
        common: DomainCommon::new(instance),
        note_abstract: attributes.attribute_abstract.clone(),
        content: attributes.content.clone(),
        authors: attributes.authors.clone(),
        object_refs: refs(&instance.relations.objects),
    };
    Ok(domain_object(
        Envelope::new(instance, config),
        DomainObject::Note(note),
    ))
}

pub fn convert_observed_data(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::ObservedData)?;
    let attributes = &instance.attributes;
    let observed_data = ObservedData {
        common: DomainCommon::new(instance),
        first_observed: attributes.first_observed.clone(),
        last_observed: attributes.last_observed.clone(),
        number_observed: attributes.number_observed,
        object_refs: refs(&instance.relations.objects),
    };
    Ok(domain_object(
        Envelope::new(instance, config),
        DomainObject::ObservedData(observed_data),
    ))
}

pub fn convert_opinion(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, DomainType::Opinion)?;
    let attributes = &instance.attributes;
    let opinion = Opinion {
        common: DomainCommon::new(instance),
        explanation: attributes.explanation.clone(),
        authors: attributes.authors.clone(),
        opinion: attributes.opinion.clone(),
        object_refs: refs(&instance.relations.objects),
    };
    Ok(domain_object(
        Envelope::new(instance, config),
        DomainObject::Opinion(opinion),
    ))
}
