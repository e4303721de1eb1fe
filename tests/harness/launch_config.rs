//! Launch configs whose steps are small shell scripts instead of python/npm.

/// Steps that record what each child saw into marker files in their cwd.
pub(crate) const MARKER_STEPS: &str = r#"
[[steps]]
label = "preboot"
program = "sh"
args = ["-c", "printf '%s' \"${PYTHONPATH-unset}\" > preboot.searchpath; printf '%s' \"${ICE_PHASE-unset}\" > preboot.phase"]
repo = "strap"
phase = "preboot"
search_path = true

[[steps]]
label = "gui"
program = "sh"
args = ["-c", "printf '%s' \"${ICE_PHASE-unset}\" > gui.phase; pwd > gui.cwd"]
repo = "gui"
subdir = "electron"
"#;

/// A single step that detaches from the test's pipes and finishes late.
pub(crate) const SLOW_STEP: &str = r#"
[[steps]]
label = "preboot"
program = "sh"
args = ["-c", "exec >/dev/null 2>&1; sleep 2; touch preboot.done"]
repo = "strap"
phase = "preboot"
"#;

/// A single step that writes a known line to its inherited stdout.
pub(crate) const ECHO_STEP: &str = r#"
[[steps]]
label = "preboot"
program = "sh"
args = ["-c", "echo child-output-marker"]
repo = "strap"
phase = "preboot"
"#;
