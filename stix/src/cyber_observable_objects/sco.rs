//! Contains the projection logic for STIX Cyber-observable Objects (SCOs).
use crate::{
    base::{
        assert_type, refs, single_ref, CustomObservableContext, CyberObservableCommon, Envelope,
    },
    config::ConverterConfig,
    cyber_observable_objects::sco_types::{
        Artifact, AutonomousSystem, CustomObservable, Directory, DomainName, EmailAddr,
        EmailMessage, EmailMimePart, EmailMimePartType, File, IpAddr, MacAddr, Mutex,
        NetworkTraffic, Process, Software, Url, UserAccount, WindowsRegistryKey,
        WindowsRegistryValue, WindowsRegistryValueType, X509Certificate, X509V3Extensions,
    },
    error::StixError as Error,
    extensions::CyberObservableExtension,
    normalize::normalize_enum,
    object::{StixObject, StixProperties},
    store::{all, StoreObject},
    taxonomy::ObservableType,
};
use serde::Serialize;
use strum::AsRefStr;

/// A STIX Cyber-observable Object (SCO) of some type.
///
/// STIX defines a set of STIX Cyber-observable Objects (SCOs) for characterizing host-based and network-based information.
/// Platform specific observables without a STIX 2.1 counterpart are emitted as custom SCOs.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_rosvg2qjx4h4>
#[derive(Clone, Debug, PartialEq, Eq, Serialize, AsRefStr)]
#[serde(untagged)]
#[strum(serialize_all = "kebab-case")]
pub enum CyberObject {
    Artifact(Artifact),
    AutonomousSystem(AutonomousSystem),
    CryptocurrencyWallet(CustomObservable),
    CryptographicKey(CustomObservable),
    Directory(Directory),
    DomainName(DomainName),
    EmailAddr(EmailAddr),
    EmailMessage(EmailMessage),
    EmailMimePartType(EmailMimePartType),
    File(File),
    Hostname(CustomObservable),
    Ipv4Addr(IpAddr),
    Ipv6Addr(IpAddr),
    MacAddr(MacAddr),
    Mutex(Mutex),
    NetworkTraffic(NetworkTraffic),
    Process(Process),
    Software(Software),
    Text(CustomObservable),
    Url(Url),
    UserAccount(UserAccount),
    WindowsRegistryKey(WindowsRegistryKey),
    WindowsRegistryValueType(WindowsRegistryValueType),
    X509Certificate(X509Certificate),
}

normalize_enum!(CyberObject {
    Artifact,
    AutonomousSystem,
    CryptocurrencyWallet,
    CryptographicKey,
    Directory,
    DomainName,
    EmailAddr,
    EmailMessage,
    EmailMimePartType,
    File,
    Hostname,
    Ipv4Addr,
    Ipv6Addr,
    MacAddr,
    Mutex,
    NetworkTraffic,
    Process,
    Software,
    Text,
    Url,
    UserAccount,
    WindowsRegistryKey,
    WindowsRegistryValueType,
    X509Certificate,
});

/// Projects a cyber-observable instance, according to its internal type
pub fn convert_cyber_observable(
    instance: &StoreObject,
    observable_type: ObservableType,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    match observable_type {
        ObservableType::Artifact => convert_artifact(instance, config),
        ObservableType::AutonomousSystem => convert_autonomous_system(instance, config),
        ObservableType::CryptocurrencyWallet
        | ObservableType::CryptographicKey
        | ObservableType::Hostname
        | ObservableType::Text => convert_custom_observable(instance, observable_type, config),
        ObservableType::Directory => convert_directory(instance, config),
        ObservableType::DomainName => convert_domain_name(instance, config),
        ObservableType::EmailAddr => convert_email_addr(instance, config),
        ObservableType::EmailMessage => convert_email_message(instance, config),
        ObservableType::EmailMimePartType => convert_email_mime_part_type(instance, config),
        ObservableType::StixFile => convert_file(instance, config),
        ObservableType::Ipv4Addr | ObservableType::Ipv6Addr => {
            convert_ip_addr(instance, observable_type, config)
        }
        ObservableType::MacAddr => convert_mac_addr(instance, config),
        ObservableType::Mutex => convert_mutex(instance, config),
        ObservableType::NetworkTraffic => convert_network_traffic(instance, config),
        ObservableType::Process => convert_process(instance, config),
        ObservableType::Software => convert_software(instance, config),
        ObservableType::Url => convert_url(instance, config),
        ObservableType::UserAccount => convert_user_account(instance, config),
        ObservableType::WindowsRegistryKey => convert_windows_registry_key(instance, config),
        ObservableType::WindowsRegistryValueType => {
            convert_windows_registry_value_type(instance, config)
        }
        ObservableType::X509Certificate => convert_x509_certificate(instance, config),
    }
}

fn cyber_object(envelope: Envelope, object: CyberObject) -> StixObject {
    StixObject::new(envelope, StixProperties::Sco(object))
}

// Custom observables declare a new SCO, and keep their context out of the extension
fn custom_envelope(instance: &StoreObject, config: &ConverterConfig) -> Envelope {
    Envelope::new(instance, config).map_extensions(|extensions| {
        extensions.with_cyber_observable(CyberObservableExtension::custom())
    })
}

// Artifacts and files also list their alternative names in the observable context
fn named_envelope(instance: &StoreObject, config: &ConverterConfig) -> Envelope {
    Envelope::new(instance, config).map_extensions(|extensions| {
        extensions.with_cyber_observable(
            CyberObservableExtension::new(instance)
                .with_additional_names(instance.attributes.x_opencti_additional_names.clone()),
        )
    })
}

pub fn convert_artifact(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::Artifact)?;
    let attributes = &instance.attributes;
    let artifact = Artifact {
        common: CyberObservableCommon::new(instance),
        mime_type: attributes.mime_type.clone(),
        payload_bin: attributes.payload_bin.clone(),
        url: attributes.url.clone(),
        hashes: Some(attributes.hashes.clone().unwrap_or_default()),
        encryption_algorithm: attributes.encryption_algorithm.clone(),
        decryption_key: attributes.decryption_key.clone(),
    };
    Ok(cyber_object(
        named_envelope(instance, config),
        CyberObject::Artifact(artifact),
    ))
}

pub fn convert_autonomous_system(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::AutonomousSystem)?;
    let attributes = &instance.attributes;
    let autonomous_system = AutonomousSystem {
        common: CyberObservableCommon::new(instance),
        number: attributes.number,
        name: attributes.name.clone(),
        rir: attributes.rir.clone(),
    };
    Ok(cyber_object(
        Envelope::observable(instance, config),
        CyberObject::AutonomousSystem(autonomous_system),
    ))
}

/// Wallets, keys, hostnames and texts share the same single value shape
pub fn convert_custom_observable(
    instance: &StoreObject,
    observable_type: ObservableType,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, observable_type)?;
    let custom = CustomObservable {
        common: CyberObservableCommon::new(instance),
        context: CustomObservableContext::new(instance),
        value: instance.attributes.value.clone(),
    };
    let object = match observable_type {
        ObservableType::CryptocurrencyWallet => CyberObject::CryptocurrencyWallet(custom),
        ObservableType::CryptographicKey => CyberObject::CryptographicKey(custom),
        ObservableType::Hostname => CyberObject::Hostname(custom),
        ObservableType::Text => CyberObject::Text(custom),
        _ => {
            return Err(Error::IncompatibleType {
                instance_type: instance.entity_type.clone(),
                expected: "custom observable".to_string(),
            })
        }
    };
    Ok(cyber_object(custom_envelope(instance, config), object))
}

pub fn convert_directory(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::Directory)?;
    let attributes = &instance.attributes;
    let directory = Directory {
        common: CyberObservableCommon::new(instance),
        path: attributes.path.clone(),
        path_enc: attributes.path_enc.clone(),
        ctime: attributes.ctime.clone(),
        mtime: attributes.mtime.clone(),
        atime: attributes.atime.clone(),
        contains_refs: refs(&instance.relations.contains),
    };
    Ok(cyber_object(
        Envelope::observable(instance, config),
        CyberObject::Directory(directory),
    ))
}

pub fn convert_domain_name(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::DomainName)?;
    let domain_name = DomainName {
        common: CyberObservableCommon::new(instance),
        value: instance.attributes.value.clone(),
        resolves_to_refs: refs(&instance.relations.resolves_to),
    };
    Ok(cyber_object(
        Envelope::observable(instance, config),
        CyberObject::DomainName(domain_name),
    ))
}

pub fn convert_email_addr(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::EmailAddr)?;
    let attributes = &instance.attributes;
    let email_addr = EmailAddr {
        common: CyberObservableCommon::new(instance),
        value: attributes.value.clone(),
        display_name: attributes.display_name.clone(),
        belongs_to_ref: single_ref(&instance.relations.belongs_to),
    };
    Ok(cyber_object(
        Envelope::observable(instance, config),
        CyberObject::EmailAddr(email_addr),
    ))
}

/// The parts of a multipart body all point back to the raw body of the message
pub fn convert_email_message(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::EmailMessage)?;
    let attributes = &instance.attributes;
    let relations = &instance.relations;
    let body_raw_ref = single_ref(&relations.body_raw);
    let body_multipart = all(&relations.body_multipart)
        .iter()
        .map(|part| EmailMimePart {
            content_type: part.attributes.content_type.clone(),
            content_disposition: part.attributes.content_disposition.clone(),
            body: part.attributes.body.clone(),
            body_raw_ref: body_raw_ref.clone(),
        })
        .collect();

    let email_message = EmailMessage {
        common: CyberObservableCommon::new(instance),
        is_multipart: attributes.is_multipart,
        date: attributes.attribute_date.clone(),
        content_type: attributes.content_type.clone(),
        from_ref: single_ref(&relations.from),
        sender_ref: single_ref(&relations.sender),
        to_refs: refs(&relations.to),
        cc_refs: refs(&relations.cc),
        bcc_refs: refs(&relations.bcc),
        message_id: attributes.message_id.clone(),
        subject: attributes.subject.clone(),
        received_lines: attributes.received_lines.clone(),
        body: attributes.body.clone(),
        body_multipart: Some(body_multipart),
        raw_email_ref: single_ref(&relations.raw_email),
    };
    Ok(cyber_object(
        Envelope::observable(instance, config),
        CyberObject::EmailMessage(email_message),
    ))
}

pub fn convert_email_mime_part_type(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::EmailMimePartType)?;
    let attributes = &instance.attributes;
    let mime_part = EmailMimePartType {
        common: CyberObservableCommon::new(instance),
        context: CustomObservableContext::new(instance),
        content_type: attributes.content_type.clone(),
        content_disposition: attributes.content_disposition.clone(),
        body: attributes.body.clone(),
        body_raw_ref: single_ref(&instance.relations.body_raw),
    };
    Ok(cyber_object(
        custom_envelope(instance, config),
        CyberObject::EmailMimePartType(mime_part),
    ))
}

pub fn convert_file(instance: &StoreObject, config: &ConverterConfig) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::StixFile)?;
    let attributes = &instance.attributes;
    let relations = &instance.relations;
    let file = File {
        common: CyberObservableCommon::new(instance),
        hashes: Some(attributes.hashes.clone().unwrap_or_default()),
        size: attributes.size,
        name: attributes.name.clone(),
        name_enc: attributes.name_enc.clone(),
        magic_number_hex: attributes.magic_number_hex.clone(),
        mime_type: attributes.mime_type.clone(),
        ctime: attributes.ctime.clone(),
        mtime: attributes.mtime.clone(),
        atime: attributes.atime.clone(),
        parent_directory_ref: single_ref(&relations.parent_directory),
        contains_refs: refs(&relations.contains),
        content_ref: single_ref(&relations.obs_content),
    };
    Ok(cyber_object(
        named_envelope(instance, config),
        CyberObject::File(file),
    ))
}

pub fn convert_ip_addr(
    instance: &StoreObject,
    observable_type: ObservableType,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, observable_type)?;
    let relations = &instance.relations;
    let ip_addr = IpAddr {
        common: CyberObservableCommon::new(instance),
        value: instance.attributes.value.clone(),
        resolves_to_refs: refs(&relations.resolves_to),
        belongs_to_refs: refs(&relations.belongs_to),
    };
    let object = match observable_type {
        ObservableType::Ipv4Addr => CyberObject::Ipv4Addr(ip_addr),
        ObservableType::Ipv6Addr => CyberObject::Ipv6Addr(ip_addr),
        _ => {
            return Err(Error::IncompatibleType {
                instance_type: instance.entity_type.clone(),
                expected: "ip address".to_string(),
            })
        }
    };
    Ok(cyber_object(Envelope::observable(instance, config), object))
}

pub fn convert_mac_addr(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::MacAddr)?;
    let mac_addr = MacAddr {
        common: CyberObservableCommon::new(instance),
        value: instance.attributes.value.clone(),
    };
    Ok(cyber_object(
        Envelope::observable(instance, config),
        CyberObject::MacAddr(mac_addr),
    ))
}

pub fn convert_mutex(instance: &StoreObject, config: &ConverterConfig) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::Mutex)?;
    let mutex = Mutex {
        common: CyberObservableCommon::new(instance),
        name: instance.attributes.name.clone(),
    };
    Ok(cyber_object(
        Envelope::observable(instance, config),
        CyberObject::Mutex(mutex),
    ))
}

pub fn convert_network_traffic(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::NetworkTraffic)?;
    let attributes = &instance.attributes;
    let relations = &instance.relations;
    let network_traffic = NetworkTraffic {
        common: CyberObservableCommon::new(instance),
        start: attributes.start.clone(),
        end: attributes.end.clone(),
        is_active: attributes.is_active,
        src_ref: single_ref(&relations.src),
        dst_ref: single_ref(&relations.dst),
        src_port: attributes.src_port,
        dst_port: attributes.dst_port,
        protocols: attributes.protocols.clone(),
        src_byte_count: attributes.src_byte_count,
        dst_byte_count: attributes.dst_byte_count,
        src_packets: attributes.src_packets,
        dst_packets: attributes.dst_packets,
        ipfix: attributes.ipfix.clone(),
        src_payload_ref: single_ref(&relations.src_payload),
        dst_payload_ref: single_ref(&relations.dst_payload),
        encapsulates_refs: refs(&relations.encapsulates),
        encapsulated_by_ref: single_ref(&relations.encapsulated_by),
    };
    Ok(cyber_object(
        Envelope::observable(instance, config),
        CyberObject::NetworkTraffic(network_traffic),
    ))
}

pub fn convert_process(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::Process)?;
    let attributes = &instance.attributes;
    let relations = &instance.relations;
    let process = Process {
        common: CyberObservableCommon::new(instance),
        is_hidden: attributes.is_hidden,
        pid: attributes.pid,
        created_time: attributes.created_time.clone(),
        cwd: attributes.cwd.clone(),
        command_line: attributes.command_line.clone(),
        environment_variables: attributes.environment_variables.clone(),
        opened_connection_refs: refs(&relations.opened_connection),
        creator_user_ref: single_ref(&relations.creator_user),
        image_ref: single_ref(&relations.image),
        parent_ref: single_ref(&relations.parent),
        child_refs: refs(&relations.child),
    };
    Ok(cyber_object(
        Envelope::observable(instance, config),
        CyberObject::Process(process),
    ))
}

pub fn convert_software(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::Software)?;
    let attributes = &instance.attributes;
    let software = Software {
        common: CyberObservableCommon::new(instance),
        name: attributes.name.clone(),
        cpe: attributes.cpe.clone(),
        swid: attributes.swid.clone(),
        languages: attributes.languages.clone(),
        vendor: attributes.vendor.clone(),
        version: attributes.version.clone(),
    };
    Ok(cyber_object(
        Envelope::observable(instance, config),
        CyberObject::Software(software),
    ))
}

pub fn convert_url(instance: &StoreObject, config: &ConverterConfig) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::Url)?;
    let url = Url {
        common: CyberObservableCommon::new(instance),
        value: instance.attributes.value.clone(),
    };
    Ok(cyber_object(
        Envelope::observable(instance, config),
        CyberObject::Url(url),
    ))
}

pub fn convert_user_account(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::UserAccount)?;
    let attributes = &instance.attributes;
    let user_account = UserAccount {
        common: CyberObservableCommon::new(instance),
        user_id: attributes.user_id.clone(),
        credential: attributes.credential.clone(),
        account_login: attributes.account_login.clone(),
        account_type: attributes.account_type.clone(),
        display_name: attributes.display_name.clone(),
        is_service_account: attributes.is_service_account,
        is_privileged: attributes.is_privileged,
        can_escalate_privs: attributes.can_escalate_privs,
        is_disabled: attributes.is_disabled,
        account_created: attributes.account_created.clone(),
        account_expires: attributes.account_expires.clone(),
        credential_last_changed: attributes.credential_last_changed.clone(),
        account_first_login: attributes.account_first_login.clone(),
        account_last_login: attributes.account_last_login.clone(),
    };
    Ok(cyber_object(
        Envelope::observable(instance, config),
        CyberObject::UserAccount(user_account),
    ))
}

pub fn convert_windows_registry_key(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::WindowsRegistryKey)?;
    let attributes = &instance.attributes;
    let values = all(&instance.relations.values)
        .iter()
        .map(|value| WindowsRegistryValue {
            name: value.attributes.name.clone(),
            data: value.attributes.data.clone(),
            data_type: value.attributes.data_type.clone(),
        })
        .collect();

    let registry_key = WindowsRegistryKey {
        common: CyberObservableCommon::new(instance),
        key: attributes.attribute_key.clone(),
        values: Some(values),
        modified_time: attributes.modified_time.clone(),
        creator_user_ref: single_ref(&instance.relations.creator_user),
        number_of_subkeys: attributes.number_of_subkeys,
    };
    Ok(cyber_object(
        Envelope::observable(instance, config),
        CyberObject::WindowsRegistryKey(registry_key),
    ))
}

pub fn convert_windows_registry_value_type(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::WindowsRegistryValueType)?;
    let attributes = &instance.attributes;
    let registry_value = WindowsRegistryValueType {
        common: CyberObservableCommon::new(instance),
        context: CustomObservableContext::new(instance),
        name: attributes.name.clone(),
        data: attributes.data.clone(),
        data_type: attributes.data_type.clone(),
    };
    Ok(cyber_object(
        custom_envelope(instance, config),
        CyberObject::WindowsRegistryValueType(registry_value),
    ))
}

pub fn convert_x509_certificate(
    instance: &StoreObject,
    config: &ConverterConfig,
) -> Result<StixObject, Error> {
    assert_type(instance, ObservableType::X509Certificate)?;
    let attributes = &instance.attributes;
    let x509_v3_extensions = X509V3Extensions {
        basic_constraints: attributes.basic_constraints.clone(),
        name_constraints: attributes.name_constraints.clone(),
        policy_constraints: attributes.policy_constraints.clone(),
        key_usage: attributes.key_usage.clone(),
        extended_key_usage: attributes.extended_key_usage.clone(),
        subject_key_identifier: attributes.subject_key_identifier.clone(),
        authority_key_identifier: attributes.authority_key_identifier.clone(),
        subject_alternative_name: attributes.subject_alternative_name.clone(),
        issuer_alternative_name: attributes.issuer_alternative_name.clone(),
        subject_directory_attributes: attributes.subject_directory_attributes.clone(),
        crl_distribution_points: attributes.crl_distribution_points.clone(),
        inhibit_any_policy: attributes.inhibit_any_policy.clone(),
        private_key_usage_period_not_before: attributes
            .private_key_usage_period_not_before
            .clone(),
        private_key_usage_period_not_after: attributes.private_key_usage_period_not_after.clone(),
        certificate_policies: attributes.certificate_policies.clone(),
        policy_mappings: attributes.policy_mappings.clone(),
    };

    let certificate = X509Certificate {
        common: CyberObservableCommon::new(instance),
        is_self_signed: attributes.is_self_signed,
        hashes: Some(attributes.hashes.clone().unwrap_or_default()),
        version: attributes.version.clone(),
        serial_number: attributes.serial_number.clone(),
        signature_algorithm: attributes.signature_algorithm.clone(),
        issuer: attributes.issuer.clone(),
        validity_not_before: attributes.validity_not_before.clone(),
        validity_not_after: attributes.validity_not_after.clone(),
        subject: attributes.subject.clone(),
        subject_public_key_algorithm: attributes.subject_public_key_algorithm.clone(),
        subject_public_key_modulus: attributes.subject_public_key_modulus.clone(),
        subject_public_key_exponent: attributes.subject_public_key_exponent,
        x509_v3_extensions: Some(x509_v3_extensions),
    };
    Ok(cyber_object(
        Envelope::observable(instance, config),
        CyberObject::X509Certificate(certificate),
    ))
}
