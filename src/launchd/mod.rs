//! Schema table for launchd job property lists
//!
//! Key set per launchd.plist(5) and Apple Technote 2083. Calendar interval
//! sub-keys are type-checked only; launchd itself rejects out-of-range
//! values at load time. The Sockets sub-schema is accepted as an opaque
//! dictionary.

use crate::document::Dict;
use crate::validator::{
    EnumValidator, KeySpec, MappingValidator, Rule, SchemaTable, ValidationResult, Warning,
};

/// Builds the schema table for a launchd job property list.
///
/// Build the table once and reuse it across validation calls; it is
/// read-only during validation.
pub fn job_table() -> SchemaTable {
    let mut table = SchemaTable::new();

    // SessionCreate is only mentioned in passing in TN2083.
    for key in [
        "Disabled",
        "EnableGlobbing",
        "RunAtLoad",
        "InitGroups",
        "StartOnMount",
        "Debug",
        "WaitForDebugger",
        "AbandonProcessGroup",
        "LowPriorityIO",
        "LaunchOnlyOnce",
        "EnableTransactions",
        "SessionCreate",
    ] {
        table.insert(key, KeySpec::of(Rule::boolean()));
    }
    table.insert("OnDemand", KeySpec::of(Rule::boolean()).deprecated());
    table.insert("ServiceIPC", KeySpec::of(Rule::boolean()).deprecated());

    table.insert("Label", KeySpec::required(Rule::string()));
    for key in [
        "UserName",
        "GroupName",
        "Program",
        "RootDirectory",
        "WorkingDirectory",
        "StandardInPath",
        "StandardOutPath",
        "StandardErrorPath",
    ] {
        table.insert(key, KeySpec::of(Rule::string()));
    }

    for key in [
        "LimitLoadToHosts",
        "LimitLoadFromHosts",
        "ProgramArguments",
        "WatchPaths",
        "QueueDirectories",
    ] {
        table.insert(key, KeySpec::of(Rule::string_array()));
    }

    for key in ["Umask", "TimeOut", "ExitTimeOut", "ThrottleInterval", "StartInterval"] {
        table.insert(key, KeySpec::of(Rule::integer()));
    }

    table.insert(
        "inetdCompatibility",
        KeySpec::of(Rule::ExactKey {
            key: "Wait".into(),
            value: Box::new(Rule::boolean()),
        }),
    );
    table.insert("KeepAlive", KeySpec::of(Rule::BoolOrDict(keep_alive_table())));
    table.insert(
        "EnvironmentVariables",
        KeySpec::of(Rule::DictOf(Box::new(Rule::string()))),
    );
    table.insert(
        "StartCalendarInterval",
        KeySpec::of(Rule::DictOrArray(calendar_table())),
    );
    table.insert(
        "SoftResourceLimits",
        KeySpec::of(Rule::Dict(resource_limits_table())),
    );
    table.insert(
        "HardResourceLimits",
        KeySpec::of(Rule::Dict(resource_limits_table())),
    );
    table.insert("Nice", KeySpec::of(Rule::integer_in(-20, 20)));
    table.insert(
        "MachServices",
        KeySpec::of(Rule::DictOf(Box::new(Rule::BoolOrDict(mach_service_table())))),
    );
    table.insert("Sockets", KeySpec::of(Rule::AnyDict));
    table.insert("BinaryOrderPreference", KeySpec::of(Rule::integer()).private());
    for key in [
        "MultipleInstances",
        "NSSupportsSuddenTermination",
        "BeginTransactionAtShutdown",
    ] {
        table.insert(key, KeySpec::of(Rule::boolean()).private());
    }
    table.insert(
        "HopefullyExitsLast",
        KeySpec::of(Rule::boolean()).private().deprecated(),
    );
    table.insert("SHAuthorizationRight", KeySpec::of(Rule::string()).private());
    // Contrary to the man page, LimitLoadToSessionType can be an array
    // according to TN2083.
    table.insert(
        "LimitLoadToSessionType",
        KeySpec::of(Rule::StringOrEnumArray(EnumValidator::new([
            "Aqua",
            "StandardIO",
            "Background",
            "LoginWindow",
        ]))),
    );
    // Documented in xpc_set_event_stream_handler(3): a dictionary of event
    // streams, each a dictionary of event dictionaries.
    table.insert(
        "LaunchEvents",
        KeySpec::of(Rule::DictOf(Box::new(Rule::DictOf(Box::new(Rule::AnyDict))))),
    );
    table.insert(
        "POSIXSpawnType",
        KeySpec::of(Rule::one_of([
            "Interactive",
            "Adaptive",
            "TALApp",
            "Widget",
            "iOSApp",
            "Background",
        ])),
    );

    table.require_one_of(["Program", "ProgramArguments"]);
    table
}

fn keep_alive_table() -> SchemaTable {
    let mut table = SchemaTable::new();
    table.insert("SuccessfulExit", KeySpec::of(Rule::boolean()));
    table.insert("NetworkState", KeySpec::of(Rule::boolean()));
    table.insert("PathState", KeySpec::of(Rule::DictOf(Box::new(Rule::boolean()))));
    table.insert(
        "OtherJobEnabled",
        KeySpec::of(Rule::DictOf(Box::new(Rule::boolean()))),
    );
    table
}

fn calendar_table() -> SchemaTable {
    let mut table = SchemaTable::new();
    for key in ["Minute", "Hour", "Day", "Weekday", "Month"] {
        table.insert(key, KeySpec::of(Rule::integer()));
    }
    table
}

fn resource_limits_table() -> SchemaTable {
    let mut table = SchemaTable::new();
    for key in [
        "Core",
        "CPU",
        "Data",
        "FileSize",
        "MemoryLock",
        "NumberOfFiles",
        "NumberOfProcesses",
        "ResidentSetSize",
        "Stack",
    ] {
        table.insert(key, KeySpec::of(Rule::integer()));
    }
    table
}

fn mach_service_table() -> SchemaTable {
    let mut table = SchemaTable::new();
    table.insert("ResetAtClose", KeySpec::of(Rule::boolean()));
    table.insert("HideUntilCheckIn", KeySpec::of(Rule::boolean()));
    table.insert("HostSpecialPort", KeySpec::of(Rule::integer()).private());
    table
}

/// Validates a decoded job dictionary against the launchd table.
///
/// # Errors
///
/// Fails with the first schema violation; see [`MappingValidator::validate`].
pub fn validate_job(document: &Dict) -> ValidationResult<Vec<Warning>> {
    let table = job_table();
    MappingValidator::new(&table).validate(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::ErrorKind;
    use serde_json::json;

    fn doc(j: serde_json::Value) -> Dict {
        serde_json::from_value(j).unwrap()
    }

    #[test]
    fn test_label_is_the_only_required_key() {
        let table = job_table();
        let required: Vec<&str> = table
            .iter()
            .filter(|(_, spec)| spec.is_required())
            .map(|(key, _)| key)
            .collect();
        assert_eq!(required, vec!["Label"]);
    }

    #[test]
    fn test_program_or_program_arguments_is_a_one_of_group() {
        let table = job_table();
        assert_eq!(table.one_of_groups().len(), 1);
        let group = &table.one_of_groups()[0];
        assert!(group.contains(&"Program".to_string()));
        assert!(group.contains(&"ProgramArguments".to_string()));
    }

    #[test]
    fn test_minimal_job_passes() {
        let document = doc(json!({
            "Label": "com.example.minimal",
            "Program": "/usr/bin/true"
        }));
        let warnings = validate_job(&document).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_job_without_program_fails() {
        let document = doc(json!({ "Label": "com.example.minimal" }));
        let err = validate_job(&document).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredKey);
    }

    #[test]
    fn test_deprecated_keys() {
        let table = job_table();
        for key in ["OnDemand", "ServiceIPC", "HopefullyExitsLast"] {
            assert!(table.get(key).unwrap().is_deprecated(), "{}", key);
        }
    }

    #[test]
    fn test_private_keys() {
        let table = job_table();
        for key in [
            "BinaryOrderPreference",
            "MultipleInstances",
            "NSSupportsSuddenTermination",
            "HopefullyExitsLast",
            "BeginTransactionAtShutdown",
            "SHAuthorizationRight",
        ] {
            assert!(table.get(key).unwrap().is_private(), "{}", key);
        }
    }
}
