use line_range_strip::builders::ranges::SkipRange;
use line_range_strip::builders::reporter::ConsoleReporter;
use line_range_strip::core::config::{ConfigManager, ConfigProvider, StripConfig};
use line_range_strip::core::engine::LineStripper;
use line_range_strip::core::files::DiskStore;
use std::fs;
use std::path::PathBuf;

fn numbered(count: usize) -> String {
    (1..=count).map(|n| format!("line {n}\n")).collect()
}

#[test]
fn test_builtin_ranges_on_full_size_file() {
    let td = tempfile::tempdir().unwrap();
    fs::create_dir_all(td.path().join("src")).unwrap();
    let target = td.path().join("src").join("main.js");
    fs::write(&target, numbered(400)).unwrap();

    // 1. Defaults, no config file
    let config = ConfigManager::new().load_config().unwrap();
    let stripper = LineStripper::with_store(&config, Box::new(DiskStore::new(td.path())));

    // 2. Strip
    let report = stripper.run(false).unwrap();
    assert_eq!(report.original_lines, 400);
    assert_eq!(report.removed_lines, 4 + 65);
    assert_eq!(report.new_lines, 331);

    // 3. The neighbours of each range survive, the ranges do not
    let content = fs::read_to_string(&target).unwrap();
    let kept: Vec<&str> = content.lines().collect();
    assert!(kept.contains(&"line 194"));
    assert!(kept.contains(&"line 199"));
    assert!(kept.contains(&"line 245"));
    assert!(kept.contains(&"line 311"));
    assert!(!kept.contains(&"line 195"));
    assert!(!kept.contains(&"line 198"));
    assert!(!kept.contains(&"line 246"));
    assert!(!kept.contains(&"line 310"));

    let [headline, counts] = ConsoleReporter::new().format_report(&report);
    assert_eq!(headline, "Fixed! Removed 69 lines");
    assert_eq!(counts, "Original: 400 lines, New: 331 lines");
}

#[test]
fn test_config_file_drives_the_strip() {
    let td = tempfile::tempdir().unwrap();
    let target = td.path().join("notes.txt");
    fs::write(&target, "keep\r\ndrop\r\ndrop\r\nkeep").unwrap();

    let config_path = td.path().join("strip.toml");
    let manager = ConfigManager::new_at(config_path);
    manager
        .save_config(&StripConfig {
            target: PathBuf::from("notes.txt"),
            skip_ranges: vec![SkipRange::new(2, 3), SkipRange::new(3, 3)],
        })
        .unwrap();

    let config = manager.load_config().unwrap();
    let stripper = LineStripper::with_store(&config, Box::new(DiskStore::new(td.path())));
    let report = stripper.run(false).unwrap();

    assert_eq!(report.removed_lines, 2);
    assert_eq!(fs::read_to_string(&target).unwrap(), "keep\r\nkeep");
}
