use crate::add_test;
use crate::common::{long_quotation, quotes_file, Fixture};

// Test yow with non-existent file
add_test!(non_existent_file, async {
    let fixture = Fixture::with_file("dummy.txt", b"dummy");
    let missing = fixture.path("missing.lines");

    let output = fixture.run_yow(&["-f", &missing]).await;
    assert_eq!(output.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.starts_with(&format!("yow: {missing}: ")));
});

// Test yow with a file that has no separators
add_test!(file_without_separators, async {
    const FILE_NAME: &str = "plain.txt";

    let fixture = Fixture::with_file(FILE_NAME, b"This is not a quotations file\n");
    let file_path = fixture.path(FILE_NAME);

    let output = fixture.run_yow(&["-f", &file_path]).await;
    assert_eq!(output.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert_eq!(output.stderr.trim_end(), "yow: file contains no separators");
});

// Test yow with empty file
add_test!(empty_file, async {
    const FILE_NAME: &str = "empty.lines";

    let fixture = Fixture::with_file(FILE_NAME, b"");
    let file_path = fixture.path(FILE_NAME);

    let output = fixture.run_yow(&["-f", &file_path]).await;
    assert_eq!(output.code(), Some(2));
});

// Test a record longer than the initial record buffer
add_test!(long_quotation_is_not_truncated, async {
    const FILE_NAME: &str = "long.lines";

    let quote = long_quotation(200);
    let fixture = Fixture::with_file(FILE_NAME, &quotes_file(&[quote.as_str()]));
    let file_path = fixture.path(FILE_NAME);

    let output = fixture.run_yow(&["-f", &file_path]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, format!("{quote}\n"));
});

// Test a very large record spanning several read buffers
add_test!(large_quotation, async {
    const FILE_NAME: &str = "large.lines";

    let quote = long_quotation(20 * 1024);
    let fixture = Fixture::with_file(FILE_NAME, &quotes_file(&[quote.as_str()]));
    let file_path = fixture.path(FILE_NAME);

    let output = fixture.run_yow(&["-f", &file_path]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout.len(), quote.len() + 1);
    assert_eq!(output.stdout.trim_end_matches('\n'), quote);
});

// Test that a bounded run fails on a file with only whitespace after the header
add_test!(max_attempts_on_whitespace_only_file, async {
    const FILE_NAME: &str = "blank.lines";

    let fixture = Fixture::with_file(FILE_NAME, b"header\0   \n\n");
    let file_path = fixture.path(FILE_NAME);

    let output = fixture
        .run_yow(&["--max-attempts", "16", "-f", &file_path])
        .await;
    assert_eq!(output.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.starts_with("yow: no quotation found after 16 attempts"));
});
