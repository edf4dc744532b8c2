// tests/version_test.rs
use semantic_versioning::{ParseError, Version};

// ============================================================================
// Valid versions: exact field extraction
// ============================================================================

/// (input, major, minor, patch, pre, meta, pre identifiers, meta identifiers)
type Expected = (
    &'static str,
    u64,
    u64,
    u64,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
);

const VALID_VERSIONS: &[Expected] = &[
    ("1.2.3", 1, 2, 3, "", "", &[], &[]),
    ("1.2.3-4", 1, 2, 3, "4", "", &["4"], &[]),
    ("1.2.3+5", 1, 2, 3, "", "5", &[], &["5"]),
    ("1.2.3-4+5", 1, 2, 3, "4", "5", &["4"], &["5"]),
    // Pre-release
    ("1.2.3-pre", 1, 2, 3, "pre", "", &["pre"], &[]),
    ("1.2.3-pre.pre", 1, 2, 3, "pre.pre", "", &["pre", "pre"], &[]),
    ("1.2.3-pre-pre", 1, 2, 3, "pre-pre", "", &["pre-pre"], &[]),
    // Non-numeric pre-release identifiers may start with a zero
    ("0.0.0-0FF", 0, 0, 0, "0FF", "", &["0FF"], &[]),
    ("0.0.0-0FF+0", 0, 0, 0, "0FF", "0", &["0FF"], &["0"]),
    // Metadata
    ("1.2.3+meta", 1, 2, 3, "", "meta", &[], &["meta"]),
    ("1.2.3+meta.meta", 1, 2, 3, "", "meta.meta", &[], &["meta", "meta"]),
    ("1.2.3+meta-meta", 1, 2, 3, "", "meta-meta", &[], &["meta-meta"]),
    // Metadata identifiers may start with a zero
    ("0.0.0+00", 0, 0, 0, "", "00", &[], &["00"]),
    ("0.0.0-0+00", 0, 0, 0, "0", "00", &["0"], &["00"]),
    // Pre-release and metadata
    ("1.2.3-pre+meta", 1, 2, 3, "pre", "meta", &["pre"], &["meta"]),
    (
        "1.2.3-pre.pre+meta.meta",
        1,
        2,
        3,
        "pre.pre",
        "meta.meta",
        &["pre", "pre"],
        &["meta", "meta"],
    ),
    ("1.2.3-pre-pre+meta-meta", 1, 2, 3, "pre-pre", "meta-meta", &["pre-pre"], &["meta-meta"]),
    ("1.0.0-alpha", 1, 0, 0, "alpha", "", &["alpha"], &[]),
    ("1.0.0-alpha.1", 1, 0, 0, "alpha.1", "", &["alpha", "1"], &[]),
    ("1.0.0-0.3.7", 1, 0, 0, "0.3.7", "", &["0", "3", "7"], &[]),
    ("1.0.0-x.7.z.92", 1, 0, 0, "x.7.z.92", "", &["x", "7", "z", "92"], &[]),
    ("1.0.0-alpha+001", 1, 0, 0, "alpha", "001", &["alpha"], &["001"]),
    ("1.0.0+20130313144700", 1, 0, 0, "", "20130313144700", &[], &["20130313144700"]),
    (
        "1.0.0-beta+exp.sha.5114f85",
        1,
        0,
        0,
        "beta",
        "exp.sha.5114f85",
        &["beta"],
        &["exp", "sha", "5114f85"],
    ),
];

#[test]
fn test_valid_versions() {
    for &(input, major, minor, patch, pre, meta, pre_ids, meta_ids) in VALID_VERSIONS {
        let version =
            Version::parse(input).unwrap_or_else(|e| panic!("{} should parse: {}", input, e));

        assert_eq!(version.to_string(), input);
        assert_eq!(version.original(), input);
        assert_eq!(version.major(), major, "major of {}", input);
        assert_eq!(version.minor(), minor, "minor of {}", input);
        assert_eq!(version.patch(), patch, "patch of {}", input);
        assert_eq!(version.pre(), pre, "pre of {}", input);
        assert_eq!(version.pre_identifiers(), pre_ids, "pre identifiers of {}", input);
        assert_eq!(version.meta(), meta, "meta of {}", input);
        assert_eq!(version.meta_identifiers(), meta_ids, "meta identifiers of {}", input);
    }
}

#[test]
fn test_round_trip_through_canonical_form() {
    for &(input, ..) in VALID_VERSIONS {
        let version = Version::parse(input).unwrap();
        assert_eq!(version.canonical(), input);
        assert_eq!(Version::parse(&version.canonical()).unwrap(), version);
    }
}

// ============================================================================
// Invalid versions
// ============================================================================

const INVALID_VERSIONS: &[&str] = &[
    "",
    "0",
    "T.X.T",
    // Negative integers
    "-0.0.0",
    "0.-0.0",
    "0.0.-0",
    // Leading zeroes
    "01.0.0",
    "0.01.1",
    "0.0.01",
    // Empty pre-release
    "0.6.0-",
    "0.6.0-.",
    "0.6.0-a.",
    "0.6.0-.b",
    "0.6.0-a..b",
    // Pre-release numbers with leading zeroes
    "0.0.0-00",
    "0.0.0-00+0",
    "1.0.0-alpha.01",
    // Empty metadata
    "0.6.0+",
    "0.6.0+.",
    "0.6.0+a.",
    "0.6.0+.b",
    "0.6.0+a..b",
    // Invalid pre-release and metadata
    "0.6.0+meta+meta",
    "0.6.0-pre+meta+meta",
    // Invalid characters
    "0.0.0-❤",
    "0.0.0+❤",
    "0.0.0-Präzisionsmessgerät",
    "١.٢.٣",
    // Surrounding noise
    " 1.0.0",
    "1.0.0 ",
    "v1.0.0",
    "1.0.0\n",
    "1.0",
    "1.0.0.0",
];

#[test]
fn test_invalid_versions() {
    for &input in INVALID_VERSIONS {
        match Version::parse(input) {
            Ok(version) => panic!("{:?} should be rejected, got {:?}", input, version),
            Err(ParseError::InvalidVersionFormat { version, .. }) => {
                assert_eq!(version, input, "error should carry the rejected input");
            }
        }
    }
}

#[test]
fn test_missing_input_rejected() {
    assert!(matches!(
        Version::parse_opt(None),
        Err(ParseError::InvalidVersionFormat { .. })
    ));
}

#[test]
fn test_from_str_matches_parse() {
    for &(input, ..) in VALID_VERSIONS {
        assert_eq!(input.parse::<Version>().unwrap(), Version::parse(input).unwrap());
    }
    for &input in INVALID_VERSIONS {
        assert!(input.parse::<Version>().is_err(), "{:?}", input);
    }
}

// ============================================================================
// Release kinds
// ============================================================================

#[test]
fn test_release_types() {
    // (input, major, minor, patch, pre)
    let cases = [
        ("0.0.0", true, false, false, false),
        ("0.1.0", false, true, false, false),
        ("0.1.1", false, false, true, false),
        ("1.0.0", true, false, false, false),
        ("1.1.0", false, true, false, false),
        ("1.1.1", false, false, true, false),
        // A pre-release is never a major, minor or patch release
        ("0.0.0-pre", false, false, false, true),
        ("0.1.0-pre", false, false, false, true),
        ("0.1.1-pre", false, false, false, true),
        ("1.0.0-pre", false, false, false, true),
        ("1.1.0-pre", false, false, false, true),
        ("1.1.1-pre", false, false, false, true),
        // Metadata does not change the kind
        ("0.0.0+meta", true, false, false, false),
        ("0.1.0+meta", false, true, false, false),
        ("0.1.1+meta", false, false, true, false),
        ("1.0.0+meta", true, false, false, false),
        ("1.1.0+meta", false, true, false, false),
        ("1.1.1+meta", false, false, true, false),
    ];

    for (input, major, minor, patch, pre) in cases {
        let version = Version::parse(input).unwrap();
        assert_eq!(version.is_major_release(), major, "is_major_release({})", input);
        assert_eq!(version.is_minor_release(), minor, "is_minor_release({})", input);
        assert_eq!(version.is_patch_release(), patch, "is_patch_release({})", input);
        assert_eq!(version.is_pre_release(), pre, "is_pre_release({})", input);
    }
}

// ============================================================================
// serde
// ============================================================================

#[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
struct Manifest {
    version: Version,
}

#[test]
fn test_serde_uses_original_string() {
    let manifest = Manifest {
        version: Version::parse("1.0.0-beta+exp.sha.5114f85").unwrap(),
    };
    let text = toml::to_string(&manifest).unwrap();
    assert_eq!(text.trim(), r#"version = "1.0.0-beta+exp.sha.5114f85""#);

    let back: Manifest = toml::from_str(&text).unwrap();
    assert_eq!(back, manifest);
}

#[test]
fn test_serde_rejects_invalid_version() {
    let err = toml::from_str::<Manifest>(r#"version = "0.6.0-a..b""#).unwrap_err();
    assert!(err.to_string().contains("Invalid semantic version"));
}

#[test]
fn test_versions_are_shareable_across_threads() {
    let version = std::sync::Arc::new(Version::parse("1.2.3-rc.1").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let version = std::sync::Arc::clone(&version);
            std::thread::spawn(move || version.pre_identifiers().len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
