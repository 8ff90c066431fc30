//! Defines the data structures for each specific STIX Cyber-observable Object type.
use crate::{
    base::{CustomObservableContext, CyberObservableCommon},
    normalize::normalize_struct,
    types::{Hashes, Identifier, StixDictionary, Timestamp},
};
use serde::Serialize;
use serde_with::skip_serializing_none;

/// Artifact Object
///
/// The Artifact object permits capturing an array of bytes (8-bits),
/// as a base64-encoded string, or linking to a file-like payload.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_4jegwl6ojbes>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Artifact {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub mime_type: Option<String>,
    pub payload_bin: Option<String>,
    pub url: Option<String>,
    /// Always emitted, even when no hash is known
    pub hashes: Option<Hashes>,
    pub encryption_algorithm: Option<String>,
    pub decryption_key: Option<String>,
}

normalize_struct!(retain Artifact with [common] {
    mime_type,
    payload_bin,
    url,
    hashes,
    encryption_algorithm,
    decryption_key,
});

/// Autonomous System
///
/// This object represents the properties of an Autonomous System (AS).
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_27gux0aol9e3>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AutonomousSystem {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    ///Specifies the number assigned to the AS.
    pub number: Option<u64>,
    ///Specifies the name of the AS
    pub name: Option<String>,
    ///Specifies the name of the Regional Internet Registry (RIR) that assigned the number to the AS.
    pub rir: Option<String>,
}

normalize_struct!(retain AutonomousSystem with [common] { number, name, rir });

/// A platform specific observable holding a single value: cryptocurrency wallets, cryptographic keys, hostnames and
/// free text.
///
/// Having no STIX 2.1 counterpart, the platform context is carried as top level properties.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CustomObservable {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    #[serde(flatten)]
    pub context: CustomObservableContext,
    pub value: Option<String>,
}

normalize_struct!(retain CustomObservable with [common, context] { value });

/// Directory
///
/// The Directory object represents the properties common to a file system directory.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_lyvpga5hlw52>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Directory {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub path: Option<String>,
    pub path_enc: Option<String>,
    pub ctime: Option<Timestamp>,
    pub mtime: Option<Timestamp>,
    pub atime: Option<Timestamp>,
    pub contains_refs: Option<Vec<Identifier>>,
}

normalize_struct!(retain Directory with [common] {
    path,
    path_enc,
    ctime,
    mtime,
    atime,
    contains_refs,
});

/// Domain Name
///
/// The Domain Name object represents the properties of a network domain name.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_prhhksbxbg87>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DomainName {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub value: Option<String>,
    pub resolves_to_refs: Option<Vec<Identifier>>,
}

normalize_struct!(retain DomainName with [common] { value, resolves_to_refs });

/// Email Address
///
/// The Email Address object represents a single email address.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_wmenahkvqmgj>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailAddr {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub value: Option<String>,
    pub display_name: Option<String>,
    /// The user account the address belongs to
    pub belongs_to_ref: Option<Identifier>,
}

normalize_struct!(retain EmailAddr with [common] { value, display_name, belongs_to_ref });

/// The Email Message object represents an instance of an email message, corresponding to the internet message
/// format described in [RFC5322](http://www.rfc-editor.org/info/rfc5322) and related RFCs.
///
/// Additional header fields are not tracked by the platform and are never emitted.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_grboc7sq5514>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub is_multipart: Option<bool>,
    pub date: Option<Timestamp>,
    pub content_type: Option<String>,
    pub from_ref: Option<Identifier>,
    pub sender_ref: Option<Identifier>,
    pub to_refs: Option<Vec<Identifier>>,
    pub cc_refs: Option<Vec<Identifier>>,
    pub bcc_refs: Option<Vec<Identifier>>,
    pub message_id: Option<String>,
    pub subject: Option<String>,
    pub received_lines: Option<Vec<String>>,
    pub body: Option<String>,
    pub body_multipart: Option<Vec<EmailMimePart>>,
    pub raw_email_ref: Option<Identifier>,
}

normalize_struct!(retain EmailMessage with [common] {
    is_multipart,
    date,
    content_type,
    from_ref,
    sender_ref,
    to_refs,
    cc_refs,
    bcc_refs,
    message_id,
    subject,
    received_lines,
    body,
    body_multipart,
    raw_email_ref,
});

/// Specifies one component of a multi-part email body.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailMimePart {
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub body: Option<String>,
    pub body_raw_ref: Option<Identifier>,
}

normalize_struct!(drop_empty EmailMimePart {
    content_type,
    content_disposition,
    body,
    body_raw_ref,
});

/// A MIME part of an email, converted as an observable of its own.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailMimePartType {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    #[serde(flatten)]
    pub context: CustomObservableContext,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub body: Option<String>,
    pub body_raw_ref: Option<Identifier>,
}

normalize_struct!(retain EmailMimePartType with [common, context] {
    content_type,
    content_disposition,
    body,
    body_raw_ref,
});

/// File
///
/// The File object represents the properties of a file.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_99bl2dibcztv>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct File {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    /// Always emitted, even when no hash is known
    pub hashes: Option<Hashes>,
    pub size: Option<u64>,
    pub name: Option<String>,
    pub name_enc: Option<String>,
    pub magic_number_hex: Option<String>,
    pub mime_type: Option<String>,
    pub ctime: Option<Timestamp>,
    pub mtime: Option<Timestamp>,
    pub atime: Option<Timestamp>,
    pub parent_directory_ref: Option<Identifier>,
    pub contains_refs: Option<Vec<Identifier>>,
    pub content_ref: Option<Identifier>,
}

normalize_struct!(retain File with [common] {
    hashes,
    size,
    name,
    name_enc,
    magic_number_hex,
    mime_type,
    ctime,
    mtime,
    atime,
    parent_directory_ref,
    contains_refs,
    content_ref,
});

/// IPv4 or IPv6 Address
///
/// Represents one or more IP addresses expressed using CIDR notation.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_ki1ufj1ku8s0>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IpAddr {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub value: Option<String>,
    pub resolves_to_refs: Option<Vec<Identifier>>,
    pub belongs_to_refs: Option<Vec<Identifier>>,
}

normalize_struct!(retain IpAddr with [common] { value, resolves_to_refs, belongs_to_refs });

/// MAC Address
///
/// The MAC Address object represents a single Media Access Control (MAC) address.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_f92nr9plf58y>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MacAddr {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub value: Option<String>,
}

normalize_struct!(retain MacAddr with [common] { value });

/// Mutex
///
/// The Mutex object represents the properties of a mutual exclusion (mutex) object.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_84hwlkdmev1w>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mutex {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub name: Option<String>,
}

normalize_struct!(retain Mutex with [common] { name });

/// Network Traffic
///
/// The Network Traffic object represents arbitrary network traffic that originates from a source and is addressed
/// to a destination.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_rgnc3w40xy>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkTraffic {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    pub is_active: Option<bool>,
    pub src_ref: Option<Identifier>,
    pub dst_ref: Option<Identifier>,
    pub src_port: Option<u64>,
    pub dst_port: Option<u64>,
    pub protocols: Option<Vec<String>>,
    pub src_byte_count: Option<u64>,
    pub dst_byte_count: Option<u64>,
    pub src_packets: Option<u64>,
    pub dst_packets: Option<u64>,
    pub ipfix: Option<StixDictionary>,
    pub src_payload_ref: Option<Identifier>,
    pub dst_payload_ref: Option<Identifier>,
    pub encapsulates_refs: Option<Vec<Identifier>>,
    pub encapsulated_by_ref: Option<Identifier>,
}

normalize_struct!(retain NetworkTraffic with [common] {
    start,
    end,
    is_active,
    src_ref,
    dst_ref,
    src_port,
    dst_port,
    protocols,
    src_byte_count,
    dst_byte_count,
    src_packets,
    dst_packets,
    ipfix,
    src_payload_ref,
    dst_payload_ref,
    encapsulates_refs,
    encapsulated_by_ref,
});

/// Process
///
/// The Process object represents common properties of an instance of a computer program as executed
/// on an operating system.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_hpppnm86a1jm>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Process {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub is_hidden: Option<bool>,
    pub pid: Option<i64>,
    pub created_time: Option<Timestamp>,
    pub cwd: Option<String>,
    pub command_line: Option<String>,
    pub environment_variables: Option<StixDictionary>,
    pub opened_connection_refs: Option<Vec<Identifier>>,
    pub creator_user_ref: Option<Identifier>,
    pub image_ref: Option<Identifier>,
    pub parent_ref: Option<Identifier>,
    pub child_refs: Option<Vec<Identifier>>,
}

normalize_struct!(retain Process with [common] {
    is_hidden,
    pid,
    created_time,
    cwd,
    command_line,
    environment_variables,
    opened_connection_refs,
    creator_user_ref,
    image_ref,
    parent_ref,
    child_refs,
});

/// Software
///
/// The Software object represents high-level properties associated with software, including software products.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_7rkyhtkdthok>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Software {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub name: Option<String>,
    pub cpe: Option<String>,
    pub swid: Option<String>,
    pub languages: Option<Vec<String>>,
    pub vendor: Option<String>,
    pub version: Option<String>,
}

normalize_struct!(retain Software with [common] { name, cpe, swid, languages, vendor, version });

/// URL
///
/// The URL object represents the properties of a uniform resource locator (URL).
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_ah3hict2dez0>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Url {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub value: Option<String>,
}

normalize_struct!(retain Url with [common] { value });

/// User Account
///
/// The User Account object represents an instance of any type of user account, including but not limited to
/// operating system, device, messaging service, and social media platform accounts.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_azo70vgj1vm2>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserAccount {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub user_id: Option<String>,
    pub credential: Option<String>,
    pub account_login: Option<String>,
    pub account_type: Option<String>,
    pub display_name: Option<String>,
    pub is_service_account: Option<bool>,
    pub is_privileged: Option<bool>,
    pub can_escalate_privs: Option<bool>,
    pub is_disabled: Option<bool>,
    pub account_created: Option<Timestamp>,
    pub account_expires: Option<Timestamp>,
    pub credential_last_changed: Option<Timestamp>,
    pub account_first_login: Option<Timestamp>,
    pub account_last_login: Option<Timestamp>,
}

normalize_struct!(retain UserAccount with [common] {
    user_id,
    credential,
    account_login,
    account_type,
    display_name,
    is_service_account,
    is_privileged,
    can_escalate_privs,
    is_disabled,
    account_created,
    account_expires,
    credential_last_changed,
    account_first_login,
    account_last_login,
});

/// Windows Registry Key
///
/// The Registry Key object represents the properties of a Windows registry key.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_luvw8wjlfo3y>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WindowsRegistryKey {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub key: Option<String>,
    pub values: Option<Vec<WindowsRegistryValue>>,
    pub modified_time: Option<Timestamp>,
    pub creator_user_ref: Option<Identifier>,
    pub number_of_subkeys: Option<u64>,
}

normalize_struct!(retain WindowsRegistryKey with [common] {
    key,
    values,
    modified_time,
    creator_user_ref,
    number_of_subkeys,
});

/// Windows Registry Value Type
///
/// The Windows Registry Value type captures the properties of a Windows Registry Key Value.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_u7n4ndghs3qq>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WindowsRegistryValue {
    pub name: Option<String>,
    pub data: Option<String>,
    pub data_type: Option<String>,
}

normalize_struct!(drop_empty WindowsRegistryValue { name, data, data_type });

/// A registry value, converted as an observable of its own.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WindowsRegistryValueType {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    #[serde(flatten)]
    pub context: CustomObservableContext,
    pub name: Option<String>,
    pub data: Option<String>,
    pub data_type: Option<String>,
}

normalize_struct!(retain WindowsRegistryValueType with [common, context] { name, data, data_type });

/// X.509 Certificate
///
/// The X.509 Certificate object represents the properties of an X.509 certificate, as defined by ITU recommendation X.509 [X.509].
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_8abcy1o5x9w1>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct X509Certificate {
    #[serde(flatten)]
    pub common: CyberObservableCommon,
    pub is_self_signed: Option<bool>,
    /// Always emitted, even when no hash is known
    pub hashes: Option<Hashes>,
    pub version: Option<String>,
    pub serial_number: Option<String>,
    pub signature_algorithm: Option<String>,
    pub issuer: Option<String>,
    pub validity_not_before: Option<Timestamp>,
    pub validity_not_after: Option<Timestamp>,
    pub subject: Option<String>,
    pub subject_public_key_algorithm: Option<String>,
    pub subject_public_key_modulus: Option<String>,
    pub subject_public_key_exponent: Option<i64>,
    pub x509_v3_extensions: Option<X509V3Extensions>,
}

normalize_struct!(retain X509Certificate with [common] {
    is_self_signed,
    hashes,
    version,
    serial_number,
    signature_algorithm,
    issuer,
    validity_not_before,
    validity_not_after,
    subject,
    subject_public_key_algorithm,
    subject_public_key_modulus,
    subject_public_key_exponent,
    x509_v3_extensions,
});

/// The X.509 v3 Extensions type captures properties associated with X.509 v3 extensions, which serve as a mechanism
/// for specifying additional information such as alternative subject names.
///
/// For more information see <https://docs.oasis-open.org/cti/stix/v2.1/os/stix-v2.1-os.html#_oudvonxzdlku>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct X509V3Extensions {
    pub basic_constraints: Option<String>,
    pub name_constraints: Option<String>,
    pub policy_constraints: Option<String>,
    pub key_usage: Option<String>,
    pub extended_key_usage: Option<String>,
    pub subject_key_identifier: Option<String>,
    pub authority_key_identifier: Option<String>,
    pub subject_alternative_name: Option<String>,
    pub issuer_alternative_name: Option<String>,
    pub subject_directory_attributes: Option<String>,
    pub crl_distribution_points: Option<String>,
    pub inhibit_any_policy: Option<String>,
    pub private_key_usage_period_not_before: Option<Timestamp>,
    pub private_key_usage_period_not_after: Option<Timestamp>,
    pub certificate_policies: Option<String>,
    pub policy_mappings: Option<String>,
}

normalize_struct!(drop_empty X509V3Extensions {
    basic_constraints,
    name_constraints,
    policy_constraints,
    key_usage,
    extended_key_usage,
    subject_key_identifier,
    authority_key_identifier,
    subject_alternative_name,
    issuer_alternative_name,
    subject_directory_attributes,
    crl_distribution_points,
    inhibit_any_policy,
    private_key_usage_period_not_before,
    private_key_usage_period_not_after,
    certificate_policies,
    policy_mappings,
});
