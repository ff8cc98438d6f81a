use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use i18n_tidy::{
    build_manifest, clean_orphaned_catalogs, owns_content, CleanupOptions, ManifestOptions,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A source catalog with `refs` reference lines, the last one pointing at `entry`
fn catalog_text(entry: &str, refs: usize) -> String {
    let mut text = String::from("msgid \"\"\nmsgstr \"\"\n\n");
    for i in 0..refs {
        text.push_str(&format!(
            "#: ../src/shared/widget-{i}.tsx:{i} ../src/shared/widget-{i}.tsx:{}\n",
            i + 1
        ));
        text.push_str(&format!("msgid \"message.{i}\"\nmsgstr \"Message {i}\"\n\n"));
    }
    text.push_str(&format!("#: ..\\{}.tsx:1\n", entry.replace('/', "\\")));
    text.push_str("msgid \"owned\"\nmsgstr \"Owned\"\n");
    text
}

/// Lay out `entries` catalog entries, every third one orphaned
fn catalog_tree(root: &Path, entries: usize) {
    for i in 0..entries {
        let entry = format!("src/components/group-{}/widget-{i}", i % 10);
        let dir = root.join(&entry);
        fs::create_dir_all(&dir).unwrap();
        let owner = if i % 3 == 0 {
            format!("src/removed/widget-{i}")
        } else {
            entry.clone()
        };
        fs::write(dir.join("en.po"), catalog_text(&owner, 20)).unwrap();
        fs::write(dir.join("en.mjs"), "export default {}\n").unwrap();
        fs::write(dir.join("zh.po"), "msgid \"owned\"\nmsgstr \"\"\n").unwrap();
        fs::write(dir.join("zh.mjs"), "export default {}\n").unwrap();
    }
}

/// Benchmark the ownership predicate on catalogs of growing size
fn bench_owns_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("owns_content");

    for refs in [10, 100, 1000] {
        let entry = "src/components/layout/mobile-header-menu";
        let text = catalog_text(entry, refs);
        group.bench_with_input(BenchmarkId::from_parameter(refs), &text, |b, text| {
            b.iter(|| owns_content(black_box(entry), black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark a full dry-run scan and a manifest build over the same tree
fn bench_catalog_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_tree");
    group.sample_size(20);

    for entries in [50, 500] {
        let temp_dir = TempDir::new().unwrap();
        let locales = temp_dir.path().join("locales");
        catalog_tree(&locales, entries);

        group.bench_with_input(
            BenchmarkId::new("dry_run_cleanup", entries),
            &locales,
            |b, locales| {
                let options = CleanupOptions::new(locales, "en").with_dry_run(true);
                b.iter(|| clean_orphaned_catalogs(&options, &mut |_: &str| {}).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("build_manifest", entries),
            &locales,
            |b, locales| {
                let options = ManifestOptions::new(locales, "en")
                    .with_supported_locales(vec!["en".to_string(), "zh".to_string()])
                    .with_included_entry_prefixes(vec!["src/".to_string()]);
                b.iter(|| build_manifest(&options).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_owns_content, bench_catalog_tree);
criterion_main!(benches);
