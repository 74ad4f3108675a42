mod common;

use common::*;

#[test]
fn test_exact_filter_keeps_match_and_ancestors() {
    let env = TestEnv::new();
    let result = env.run(&["-f", "C"], "A B\nA C\n");

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.lines(), [" A", "└── C"]);
}

#[test]
fn test_exact_filter_on_module_graph() {
    let env = TestEnv::new();
    let result = env.run(&["--filter", "golang.org/x/text@v0.3.7"], MODULE_GRAPH);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        result.lines(),
        [
            " example.com/app",
            "└── golang.org/x/text@v0.14.0",
            "   └── golang.org/x/tools@v0.6.0",
            "      └── golang.org/x/text@v0.3.7",
        ]
    );
}

#[test]
fn test_no_version_filter_stops_at_first_match() {
    let env = TestEnv::new();
    let result = env.run(&["-n", "golang.org/x/text"], MODULE_GRAPH);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        result.lines(),
        [" example.com/app", "└── golang.org/x/text@v0.14.0"]
    );
}

#[test]
fn test_filters_combine() {
    let env = TestEnv::new();
    let result = env.run(
        &[
            "--filter",
            "github.com/spf13/pflag@v1.0.5",
            "--filter-no-version",
            "golang.org/x/tools",
        ],
        MODULE_GRAPH,
    );

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        result.lines(),
        [
            " example.com/app",
            "├── github.com/spf13/cobra@v1.8.0",
            "│  └── github.com/spf13/pflag@v1.0.5",
            "└── golang.org/x/text@v0.14.0",
            "   └── golang.org/x/tools@v0.6.0",
        ]
    );
}

#[test]
fn test_comma_separated_filter() {
    let env = TestEnv::new();
    let result = env.run(&["-f", "B,C"], "A B\nA C\nA D\n");

    assert!(result.success);
    assert_eq!(result.lines(), [" A", "├── B", "└── C"]);
}

#[test]
fn test_filter_matching_nothing_fails_without_output() {
    let env = TestEnv::new();
    let result = env.run(&["-f", "Z"], "A B\nA C\n");

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.is_empty());
    assert!(
        result.stderr.contains("no node matches the filter [Z]"),
        "stderr:\n{}",
        result.stderr
    );
}
