use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use keybind_finder::core::{BindingIndex, KeyboardKey, ScanOptions, SymbolicKey, scanner};
use std::fs;
use std::hint::black_box;
use std::path::Path;
use tempfile::TempDir;

const KEY_NAMES: &[&str] = &["Up", "Down", "Space", "F5", "LShiftKey", "DPadUp", "E", "Return"];

// Helper to build a plugin-style config file with a mix of bindings and noise
fn sample_config(lines: usize) -> String {
    let mut content = String::from("[Keys]\n");
    for i in 0..lines {
        match i % 4 {
            0 => content.push_str(&format!("Action{} = {}\n", i, KEY_NAMES[i % KEY_NAMES.len()])),
            1 => content.push_str(&format!("Volume{} = {}\n", i, i)),
            2 => content.push_str(&format!("Label{} = Something else\n", i)),
            _ => content.push_str("; a comment line\n"),
        }
    }
    content
}

// Helper to create nested plugin directories, each holding a few ini files
fn create_plugin_tree(base: &Path, plugins: usize, files_per_plugin: usize) {
    for p in 0..plugins {
        let dir = base.join("Plugins").join(format!("plugin{}", p));
        fs::create_dir_all(&dir).unwrap();
        for f in 0..files_per_plugin {
            fs::write(dir.join(format!("settings{}.ini", f)), sample_config(40)).unwrap();
        }
        fs::write(dir.join("readme.txt"), "not a config").unwrap();
    }
}

fn bench_ingest_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest_str");

    for lines in [10, 100, 1000].iter() {
        let content = sample_config(*lines);
        group.bench_with_input(BenchmarkId::from_parameter(lines), &content, |b, content| {
            b.iter(|| {
                let mut index = BindingIndex::new();
                index.ingest_str(black_box("plugins/x/settings.ini"), black_box(content))
            });
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_mixed_tokens", |b| {
        b.iter(|| {
            for token in ["Up", "NotAKey", "RightShoulder", "Oem102", "up"] {
                black_box(SymbolicKey::resolve(black_box(token)));
            }
        });
    });
}

fn bench_scan_and_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_and_index");

    for plugins in [5, 20, 50].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(plugins), plugins, |b, &plugins| {
            let temp_dir = TempDir::new().unwrap();
            create_plugin_tree(temp_dir.path(), plugins, 3);
            let opts = ScanOptions::default();

            b.iter(|| {
                let mut index = BindingIndex::new();
                for file in scanner::collect_files(black_box(temp_dir.path()), &opts) {
                    index.ingest_file(&file).unwrap();
                }
                assert!(!index.lookup(SymbolicKey::Keyboard(KeyboardKey::Up)).is_empty());
                index
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ingest_str, bench_resolve, bench_scan_and_index);
criterion_main!(benches);
