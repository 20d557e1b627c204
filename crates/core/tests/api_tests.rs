//! Library API integration tests
use postdraft_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).unwrap()
}

fn tutorial_summary() -> PageSummary {
    let html = fixture("tutorial.html");
    let doc = Document::parse_with_url(&html, "https://example.com/learn-python").unwrap();
    doc.extract_summary()
}

#[test]
fn test_extract_summary_bounds_hold() {
    for name in ["tutorial.html", "bare.html", "product.html"] {
        let html = fixture(name);
        let doc = Document::parse_with_url(&html, "https://example.com/page").unwrap();
        let summary = doc.extract_summary();

        assert!(!summary.title.is_empty(), "{}: title must never be empty", name);
        assert!(summary.description.chars().count() <= 200, "{}", name);
        assert!(summary.images.len() <= 10, "{}", name);
        assert!(summary.key_points.len() <= 8, "{}", name);
        assert!(summary.brand_colors.len() <= 5, "{}", name);
        assert!(summary.content.chars().count() <= 1000, "{}", name);
        for point in &summary.key_points {
            let len = point.chars().count();
            assert!(len >= 10 && len < 150, "{}: key point length {} out of range", name, len);
        }
    }
}

#[test]
fn test_tutorial_extraction_fields() {
    let summary = tutorial_summary();

    assert_eq!(summary.title, "How to Learn Python in 30 Days");
    assert_eq!(summary.description, "A complete guide for beginners");
    assert_eq!(
        summary.main_image.as_deref(),
        Some("https://example.com/images/python-course.png")
    );
    assert!(summary.key_points.iter().any(|p| p.contains("Week one")));
    assert!(summary.brand_colors.contains(&"#667eea".to_string()));
    assert!(summary.brand_colors.contains(&"#fafafb".to_string()));

    let logo = summary.logo.expect("logo should match header image");
    assert_eq!(logo.src, "https://example.com/assets/logo.svg");

    assert_eq!(summary.metadata.get("author"), Some(&"Jane Writer".to_string()));
    assert!(summary.content.contains("consistency"));
}

#[test]
fn test_bare_page_degrades_gracefully() {
    let html = fixture("bare.html");
    let doc = Document::parse_with_url(&html, "https://example.com/bare").unwrap();
    let summary = doc.extract_summary();

    assert_eq!(summary.title, "Untitled Page");
    assert_eq!(summary.description, "");
    assert!(summary.main_image.is_none());
    assert!(summary.logo.is_none());
    assert!(summary.key_points.is_empty());
}

#[test]
fn test_scheme_relative_og_image_normalized() {
    let html = fixture("product.html");
    let doc = Document::parse_with_url(&html, "https://ledgerline.example").unwrap();
    let summary = doc.extract_summary();

    assert_eq!(
        summary.main_image.as_deref(),
        Some("https://cdn.example.com/ledgerline/social-card.png")
    );
}

#[test]
fn test_tutorial_classification_round_trip() {
    let summary = tutorial_summary();
    assert_eq!(classify(&summary), ContentType::Tutorial);
}

#[test]
fn test_product_classification() {
    let html = fixture("product.html");
    let doc = Document::parse_with_url(&html, "https://ledgerline.example").unwrap();
    assert_eq!(classify(&doc.extract_summary()), ContentType::Product);
}

#[test]
fn test_generate_all_supported_pairs_nonempty() {
    let summary = tutorial_summary();
    let generator = Generator::with_config(GeneratorConfig::builder().seed(11).build());

    for platform in [Platform::Linkedin, Platform::Twitter, Platform::Instagram, Platform::Facebook] {
        for style in [Style::Professional, Style::Modern, Style::Minimal] {
            let draft = generator.generate(&summary, platform, style);
            assert!(!draft.text().is_empty(), "{:?}/{:?}", platform, style);
        }
    }
}

#[test]
fn test_unknown_platform_and_style_fall_back() {
    let summary = tutorial_summary();
    let generator = Generator::new();

    let draft = generator.generate_lenient(&summary, "friendster", "vaporwave");
    assert!(!draft.text().is_empty());
    assert!(matches!(draft, PostDraft::Single(_)));
}

#[test]
fn test_hashtag_caps_per_platform() {
    let summary = tutorial_summary();
    let generator = Generator::with_config(GeneratorConfig::builder().seed(2).build());

    for (platform, cap) in [
        (Platform::Linkedin, 7),
        (Platform::Twitter, 7),
        (Platform::Facebook, 7),
        (Platform::Instagram, 30),
    ] {
        let draft = generator.generate(&summary, platform, Style::Professional);
        let tag_count = draft.text().split_whitespace().filter(|w| w.starts_with('#')).count();
        assert!(tag_count <= cap, "{:?}: {} tags over cap {}", platform, tag_count, cap);
    }
}

#[test]
fn test_twitter_thread_shape_property() {
    let summary = tutorial_summary();
    let generator = Generator::with_config(GeneratorConfig::builder().seed(3).build());

    let draft = generator.generate(&summary, Platform::Twitter, Style::Professional);
    let PostDraft::Thread(segments) = draft else { panic!("twitter must thread") };

    let expected_points = summary.key_points.len().min(Platform::Twitter.key_point_cap());
    assert_eq!(segments.len(), expected_points + 2);
    for segment in &segments {
        assert!(segment.chars().count() <= 280);
    }
}

#[test]
fn test_facebook_numbered_points_render() {
    let mut summary = tutorial_summary();
    summary.key_points = vec!["Point A".to_string(), "Point B".to_string()];

    let generator = Generator::with_config(GeneratorConfig::builder().seed(4).build());
    let draft = generator.generate(&summary, Platform::Facebook, Style::Professional);

    assert!(draft.text().contains("1. Point A\n2. Point B"));
}

#[test]
fn test_seeded_generation_is_stable() {
    let summary = tutorial_summary();
    let a = generate_seeded(&summary, Platform::Instagram, Style::Modern, 99);
    let b = generate_seeded(&summary, Platform::Instagram, Style::Modern, 99);
    assert_eq!(a, b);
}

#[test]
fn test_rgb_to_hex_property() {
    assert_eq!(rgb_to_hex("rgb(102, 126, 234)"), Some("#667eea".to_string()));
}

#[test]
fn test_url_normalization_idempotent() {
    let base = url::Url::parse("https://example.com/a/b").unwrap();
    for raw in [
        "https://example.com/x.png",
        "//cdn.example.com/x.png",
        "/x.png",
        "x.png",
    ] {
        let once = normalize_url(raw, Some(&base)).unwrap();
        let twice = normalize_url(&once, Some(&base)).unwrap();
        assert_eq!(once, twice, "normalization must be idempotent for {}", raw);
    }
}

#[test]
fn test_unsafe_base_url_never_exported() {
    let mut summary = tutorial_summary();
    summary.url = "javascript:alert(1)".to_string();

    for platform in [Platform::Linkedin, Platform::Twitter, Platform::Instagram, Platform::Facebook] {
        let draft = generate_seeded(&summary, platform, Style::Professional, 13);
        assert!(!draft.text().contains("javascript:alert(1)"), "{:?} exported the raw URL", platform);
    }
}

#[test]
fn test_draft_passes_sanitization() {
    let mut summary = tutorial_summary();
    summary.description = "desc with <script>alert(1)</script> markup".to_string();

    let draft = generate_seeded(&summary, Platform::Linkedin, Style::Professional, 8);
    assert!(!draft.text().contains("<script>"));
}

#[cfg(feature = "remote")]
#[test]
fn test_remote_failure_matches_deterministic_output() {
    let summary = tutorial_summary();
    let remote_config = RemoteConfig {
        endpoint: "http://127.0.0.1:9".to_string(),
        api_key: "key".to_string(),
        timeout: 1,
        ..Default::default()
    };

    for platform in [Platform::Linkedin, Platform::Twitter] {
        let fallback = {
            let summary = summary.clone();
            let remote_config = remote_config.clone();
            std::thread::spawn(move || {
                tokio::runtime::Runtime::new().unwrap().block_on(async {
                    let generator = Generator::with_config(GeneratorConfig::builder().seed(21).build());
                    generator
                        .generate_with_remote(&summary, platform, Style::Professional, &remote_config)
                        .await
                })
            })
            .join()
            .unwrap()
        };

        let generator = Generator::with_config(GeneratorConfig::builder().seed(21).build());
        let deterministic = generator.generate(&summary, platform, Style::Professional);

        assert_eq!(fallback, deterministic, "{:?}", platform);
    }
}
