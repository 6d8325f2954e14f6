use assert_cmd::Command;
use predicates::prelude::*;

fn renthub(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("renthub").unwrap();
    cmd.env("RENTHUB_HOME", home);
    cmd
}

#[test]
fn init_seeds_and_list_shows_all_listings() {
    let temp_dir = tempfile::tempdir().unwrap();

    renthub(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("Initialized renthub store"));

    renthub(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Modern Downtown Apartment"))
        .stdout(predicates::str::contains("Cozy Studio Apartment"))
        .stdout(predicates::str::contains("Luxury Family House"));
}

#[test]
fn init_is_idempotent() {
    let temp_dir = tempfile::tempdir().unwrap();

    renthub(temp_dir.path()).arg("init").assert().success();

    renthub(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("already initialized"));
}

#[test]
fn featured_flag_narrows_the_listing() {
    let temp_dir = tempfile::tempdir().unwrap();
    renthub(temp_dir.path()).arg("init").assert().success();

    renthub(temp_dir.path())
        .args(["list", "--featured"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Modern Downtown Apartment"))
        .stdout(predicates::str::contains("Cozy Studio Apartment").not());
}

#[test]
fn rent_band_search_matches_one_listing() {
    let temp_dir = tempfile::tempdir().unwrap();
    renthub(temp_dir.path()).arg("init").assert().success();

    renthub(temp_dir.path())
        .args(["search", "--min-rent", "2000", "--max-rent", "3000"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Modern Downtown Apartment"))
        .stdout(predicates::str::contains("Luxury Family House").not())
        .stdout(predicates::str::contains("1 properties found"));
}

#[test]
fn query_matches_city_names() {
    let temp_dir = tempfile::tempdir().unwrap();
    renthub(temp_dir.path()).arg("init").assert().success();

    renthub(temp_dir.path())
        .args(["search", "Austin"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Luxury Family House"))
        .stdout(predicates::str::contains("Modern Downtown Apartment").not());
}

#[test]
fn inverted_rent_band_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    renthub(temp_dir.path()).arg("init").assert().success();

    renthub(temp_dir.path())
        .args(["search", "--min-rent", "3000", "--max-rent", "1000"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid filter"));
}

#[test]
fn non_numeric_rent_bound_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    renthub(temp_dir.path())
        .args(["search", "--min-rent", "cheap"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid filter"));
}

#[test]
fn lease_moves_through_approve_and_sign() {
    let temp_dir = tempfile::tempdir().unwrap();
    renthub(temp_dir.path()).arg("init").assert().success();

    renthub(temp_dir.path())
        .args(["lease", "approve", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Lease 1 is now Approved"));

    renthub(temp_dir.path())
        .args(["lease", "sign", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Lease 1 is now Signed"));

    renthub(temp_dir.path())
        .args(["lease", "show", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Signed"))
        .stdout(predicates::str::contains("activate"));
}

#[test]
fn off_table_action_fails_with_context() {
    let temp_dir = tempfile::tempdir().unwrap();
    renthub(temp_dir.path()).arg("init").assert().success();

    // Seeded lease is pending approval; signing skips a step.
    renthub(temp_dir.path())
        .args(["lease", "sign", "1"])
        .assert()
        .failure()
        .stderr(predicates::str::contains(
            "Cannot sign a lease in 'pending_approval' status",
        ));
}

#[test]
fn new_draft_defaults_money_from_the_listing() {
    let temp_dir = tempfile::tempdir().unwrap();
    renthub(temp_dir.path()).arg("init").assert().success();

    renthub(temp_dir.path())
        .args([
            "lease",
            "new",
            "--property",
            "2",
            "--tenant",
            "9",
            "--start",
            "2024-06-01",
            "--end",
            "2025-06-01",
            "--terms",
            "Month to month thereafter.",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "created for \"Cozy Studio Apartment\"",
        ));
}

#[test]
fn favorites_toggle_within_one_invocation() {
    let temp_dir = tempfile::tempdir().unwrap();
    renthub(temp_dir.path()).arg("init").assert().success();

    renthub(temp_dir.path())
        .args(["fav", "1", "3"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Modern Downtown Apartment"))
        .stdout(predicates::str::contains("Luxury Family House"));

    // Favorites are session state, so a fresh invocation starts empty.
    renthub(temp_dir.path())
        .arg("fav")
        .assert()
        .success()
        .stdout(predicates::str::contains("No favorite properties"));
}

#[test]
fn favoriting_a_phantom_listing_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    renthub(temp_dir.path()).arg("init").assert().success();

    renthub(temp_dir.path())
        .args(["fav", "42"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Property not found: 42"));
}

#[test]
fn download_writes_a_lease_document() {
    let temp_dir = tempfile::tempdir().unwrap();
    renthub(temp_dir.path()).arg("init").assert().success();

    let out = temp_dir.path().join("lease.txt");
    renthub(temp_dir.path())
        .args(["lease", "download", "1", "--out"])
        .arg(&out)
        .assert()
        .success();

    let doc = std::fs::read_to_string(&out).unwrap();
    assert!(doc.contains("LEASE AGREEMENT #1"));
    assert!(doc.contains("Modern Downtown Apartment"));
}

#[test]
fn config_set_changes_the_currency_symbol() {
    let temp_dir = tempfile::tempdir().unwrap();
    renthub(temp_dir.path()).arg("init").assert().success();

    renthub(temp_dir.path())
        .args(["config", "currency", "EUR "])
        .assert()
        .success()
        .stdout(predicates::str::contains("currency set to EUR"));

    renthub(temp_dir.path())
        .args(["search", "--max-rent", "2000"])
        .assert()
        .success()
        .stdout(predicates::str::contains("EUR 1800/mo"));
}

#[test]
fn doctor_reports_a_clean_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    renthub(temp_dir.path()).arg("init").assert().success();

    renthub(temp_dir.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicates::str::contains("No inconsistencies found"));
}

#[test]
fn export_then_import_restores_listings() {
    let temp_dir = tempfile::tempdir().unwrap();
    renthub(temp_dir.path()).arg("init").assert().success();

    let archive = temp_dir.path().join("backup.tar.gz");
    renthub(temp_dir.path())
        .args(["export", "--out"])
        .arg(&archive)
        .assert()
        .success();
    assert!(archive.exists());

    // Import a single listing into a fresh store.
    let listing = serde_json::json!({
        "id": "77",
        "title": "Imported Loft",
        "description": "A loft that arrived by file.",
        "property_type": "apartment",
        "location": {
            "address": "1 Import Way",
            "city": "Portland",
            "state": "OR",
            "zip": "97201",
            "coordinates": null
        },
        "rent": 2100,
        "deposit": 2100,
        "bedrooms": 1,
        "bathrooms": 1,
        "area": 800,
        "amenities": ["parking"],
        "images": [],
        "landlord_id": "5",
        "landlord": {
            "name": "Pat Chen",
            "email": "pat@example.com",
            "phone": "(555) 000-1111"
        },
        "availability": { "available": true, "available_from": "2024-07-01" },
        "featured": false,
        "created_at": "2024-03-01T00:00:00Z",
        "updated_at": "2024-03-01T00:00:00Z"
    });
    let file = temp_dir.path().join("loft.json");
    std::fs::write(&file, serde_json::to_string_pretty(&listing).unwrap()).unwrap();

    let fresh = tempfile::tempdir().unwrap();
    renthub(fresh.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success();

    renthub(fresh.path())
        .args(["view", "77"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Imported Loft"));
}
