//! Built-in demo network: an external attacker working toward a SQL database.

use super::types::{NodeSpec, Scenario, StepSpec};

fn step(source: &str, target: &str, exploit: &str) -> StepSpec {
    StepSpec {
        source: source.to_string(),
        target: target.to_string(),
        exploit: Some(exploit.to_string()),
    }
}

/// Three layers (entry, lateral movement, depth) plus a longer decoy route
/// through a printer.
pub fn demo_scenario() -> Scenario {
    Scenario {
        name: Some("internet-to-database".to_string()),
        source: Some("Internet".to_string()),
        nodes: vec![NodeSpec {
            id: "Database_SQL".to_string(),
            critical: true,
        }],
        steps: vec![
            // Entry
            step("Internet", "WebServer", "CVE-2023-XYZ (RCE)"),
            step("Internet", "VPN_Gateway", "Weak_Credentials"),
            // Lateral movement
            step("WebServer", "AppServer", "Config_Error"),
            step("WebServer", "FileServer", "SMB_Exploit"),
            step("VPN_Gateway", "Internal_PC", "Phishing_Link"),
            // Depth
            step("AppServer", "Database_SQL", "SQL_Injection"),
            step("FileServer", "Database_SQL", "Stored_Creds"),
            step("Internal_PC", "Database_SQL", "Admin_Access"),
            // Decoy
            step("Internal_PC", "Printer", "Default_Password"),
            step("Printer", "Database_SQL", "Legacy_Connect"),
        ],
    }
}
