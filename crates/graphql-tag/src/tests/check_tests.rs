use crate::tests::utils::ScratchDir;
use crate::tests::utils::run_cli;
use std::process::ExitCode;

#[tokio::test]
async fn checks_every_graphql_file_in_a_tree() {
    let dir = ScratchDir::new("check-tree");
    dir.write("fragments/user.graphql", "fragment UserFields on User { id }");
    dir.write("queries/me.gql", "query Me { me { ...UserFields } }");
    dir.write("queries/viewer.gql", "query Viewer {\n  viewer { id }\n}");
    dir.write("README.txt", "not graphql");

    let result = run_cli(&["check", dir.path().to_str().unwrap()]).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    let stdout = result.stdout.unwrap();
    assert!(stdout.contains("Analyzed 3 files."), "{stdout}");
    assert!(stdout.contains("Skipped 1 non-graphql files."), "{stdout}");
    assert!(stdout.contains("Found 2 operations."), "{stdout}");
    assert!(stdout.contains("Found 1 fragment names."), "{stdout}");
    assert!(result.stderr.is_none());
}

#[tokio::test]
async fn identical_files_parse_to_one_document() {
    let dir = ScratchDir::new("check-identical");
    dir.write("a.graphql", "query Q { a }");
    dir.write("b.graphql", "query Q {\n  a,\n}\n");

    let result = run_cli(&["check", dir.path().to_str().unwrap()]).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    assert!(result.stdout.unwrap().contains("Parsed 1 distinct documents."));
}

#[tokio::test]
async fn syntax_errors_fail_the_check() {
    let dir = ScratchDir::new("check-syntax");
    dir.write("good.graphql", "query Q { a }");
    dir.write("bad.graphql", "query Q { a");

    let result = run_cli(&["check", dir.path().to_str().unwrap()]).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    let stderr = result.stderr.unwrap();
    assert!(stderr.contains("bad.graphql"), "{stderr}");
    assert!(!stderr.contains("good.graphql"), "{stderr}");
}

#[tokio::test]
async fn fragment_conflicts_warn_by_default() {
    let dir = ScratchDir::new("check-conflict-warn");
    dir.write("a.graphql", "fragment Shared on T { a }");
    dir.write("b.graphql", "fragment Shared on T { b }");

    let result = run_cli(&[
        "check",
        "--no-fragment-warnings",
        dir.path().to_str().unwrap(),
    ]).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    let stderr = result.stderr.unwrap();
    assert!(stderr.contains("`Shared`"), "{stderr}");
    assert!(stderr.contains("a.graphql"), "{stderr}");
    assert!(stderr.contains("b.graphql"), "{stderr}");
}

#[tokio::test]
async fn fragment_conflicts_can_be_denied() {
    let dir = ScratchDir::new("check-conflict-deny");
    dir.write("a.graphql", "fragment Shared on T { a }");
    dir.write("b.graphql", "fragment Shared on T { b }");

    let result = run_cli(&[
        "check",
        "--deny-fragment-conflicts",
        "--no-fragment-warnings",
        dir.path().to_str().unwrap(),
    ]).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stderr.unwrap().contains("`Shared`"));
}

#[tokio::test]
async fn fragment_variables_need_the_flag() {
    let dir = ScratchDir::new("check-fragment-vars");
    dir.write("a.graphql", "fragment F($a: Int) on T { b(a: $a) }");
    let path = dir.path().to_str().unwrap();

    let without_flag = run_cli(&["check", path]).await;
    assert_eq!(without_flag.exit_code, ExitCode::FAILURE);

    let with_flag =
        run_cli(&["check", "--experimental-fragment-variables", path]).await;
    assert_eq!(with_flag.exit_code, ExitCode::SUCCESS);
}

#[tokio::test]
async fn custom_file_extensions() {
    let dir = ScratchDir::new("check-exts");
    dir.write("a.graphql", "query Q { a");
    dir.write("b.txt", "query Q { b }");

    let result = run_cli(&[
        "check",
        "--graphql-file-exts",
        ".txt",
        dir.path().to_str().unwrap(),
    ]).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    assert!(result.stdout.unwrap().contains("Analyzed 1 files."));
}

#[tokio::test]
async fn single_file_with_other_extension_is_checked() {
    let dir = ScratchDir::new("check-single-file");
    let file_path = dir.write("query.txt", "query Q { a }");

    let result = run_cli(&["check", file_path.to_str().unwrap()]).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    let stdout = result.stdout.unwrap();
    assert!(stdout.contains("Analyzed 1 files."), "{stdout}");
    assert!(stdout.contains("Skipped 0 non-graphql files."), "{stdout}");
}

#[tokio::test]
async fn conflict_report_groups_files_by_definition() {
    let dir = ScratchDir::new("check-conflict-groups");
    let a = dir.write("a.graphql", "fragment Shared on T { a }");
    let b = dir.write("b.graphql", "fragment Shared on T { b }");
    let c = dir.write("c.graphql", "fragment Shared on T {\n  a\n}");

    let result = run_cli(&[
        "check",
        "--no-fragment-warnings",
        dir.path().to_str().unwrap(),
    ]).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    let stderr = result.stderr.unwrap();
    assert!(stderr.contains("`Shared` has 2 different definitions"), "{stderr}");
    assert!(
        stderr.contains(&format!(
            "`fragment Shared on T {{ a }}` in: {}, {}",
            a.display(),
            c.display(),
        )),
        "{stderr}",
    );
    assert!(
        stderr.contains(&format!(
            "`fragment Shared on T {{ b }}` in: {}",
            b.display(),
        )),
        "{stderr}",
    );
}
