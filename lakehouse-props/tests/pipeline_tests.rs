//! Validate-then-transform pipeline tests
//!
//! Exercises validation failures, alteration rules and the backend
//! configuration produced for representative catalog definitions.

#[path = "testutils/mod.rs"]
mod testutils;

use lakehouse_props::namespace::{authentication, connection, kerberos, oss, s3};
use lakehouse_props::{PropertyChange, PropertyError, RegistryConfig, TypedValue};
use testutils::{props, PropsFixture};

#[test]
fn test_jdbc_backend_translation() {
    let fixture = PropsFixture::new();
    let output = fixture.pipeline(&[("catalog-backend", "jdbc"), ("warehouse", "/tmp/wh")]);

    assert_eq!(output, props(&[("metastore", "jdbc"), ("warehouse", "/tmp/wh")]));
}

#[test]
fn test_invalid_backend_tag() {
    let fixture = PropsFixture::new();
    let error = fixture.assert_invalid(&[
        (connection::CATALOG_BACKEND, "not-a-backend"),
        (connection::WAREHOUSE, "/tmp/wh"),
    ]);

    match error {
        PropertyError::InvalidEnumValue { name, allowed, got } => {
            assert_eq!(name, connection::CATALOG_BACKEND);
            assert_eq!(allowed, connection::BACKEND_TAGS.to_vec());
            assert_eq!(got, "not-a-backend");
        }
        other => panic!("expected InvalidEnumValue, got {:?}", other),
    }
}

#[test]
fn test_declared_backend_tags_are_typed() {
    let fixture = PropsFixture::new();
    for tag in connection::BACKEND_TAGS {
        let validated =
            fixture.assert_valid(&[(connection::CATALOG_BACKEND, tag), (connection::WAREHOUSE, "/wh")]);
        assert_eq!(
            validated.get(connection::CATALOG_BACKEND),
            Some(&TypedValue::Enum(tag.to_string()))
        );
    }
}

#[test]
fn test_missing_warehouse() {
    let fixture = PropsFixture::new();
    let error = fixture.assert_invalid(&[(connection::CATALOG_BACKEND, "filesystem")]);
    assert_eq!(
        error,
        PropertyError::MissingRequiredProperty("warehouse".to_string())
    );
}

#[test]
fn test_missing_uri_is_not_emitted() {
    let fixture = PropsFixture::new();
    let output = fixture.pipeline(&[("catalog-backend", "hive"), ("warehouse", "/wh")]);
    assert!(!output.contains_key("uri"));
    assert_eq!(output.len(), 2);
}

#[test]
fn test_jdbc_credentials_translation() {
    let fixture = PropsFixture::new();
    let output = fixture.pipeline(&[
        ("catalog-backend", "jdbc"),
        ("warehouse", "/wh"),
        ("uri", "jdbc:mysql://localhost:3306/meta"),
        ("jdbc-user", "admin"),
        ("jdbc-password", "secret"),
        ("jdbc-driver", "com.mysql.cj.jdbc.Driver"),
    ]);

    assert_eq!(
        output,
        props(&[
            ("metastore", "jdbc"),
            ("warehouse", "/wh"),
            ("uri", "jdbc:mysql://localhost:3306/meta"),
            ("jdbc.user", "admin"),
            ("jdbc.password", "secret"),
            ("jdbc-driver", "com.mysql.cj.jdbc.Driver"),
        ])
    );
}

#[test]
fn test_s3_endpoint_only() {
    let fixture = PropsFixture::new();
    let output = fixture.pipeline(&[
        ("catalog-backend", "filesystem"),
        ("warehouse", "s3://bucket/wh"),
        (s3::S3_ENDPOINT, "http://localhost:9000"),
    ]);

    assert_eq!(
        output.get(s3::BACKEND_S3_ENDPOINT).map(String::as_str),
        Some("http://localhost:9000")
    );
    assert!(!output.contains_key(s3::BACKEND_S3_ACCESS_KEY));
    assert!(!output.contains_key(s3::BACKEND_S3_SECRET_KEY));
    assert!(!output.contains_key(s3::S3_ENDPOINT));
    assert!(output.values().all(|v| !v.is_empty()));
    assert_eq!(output.len(), 3);
}

#[test]
fn test_oss_credentials_translation() {
    let fixture = PropsFixture::new();
    let output = fixture.pipeline(&[
        ("catalog-backend", "filesystem"),
        ("warehouse", "oss://bucket/wh"),
        (oss::OSS_ENDPOINT, "oss-cn-hangzhou.aliyuncs.com"),
        (oss::OSS_ACCESS_KEY_ID, "ak"),
        (oss::OSS_SECRET_ACCESS_KEY, "sk"),
    ]);

    assert_eq!(
        output.get(oss::BACKEND_OSS_ENDPOINT).map(String::as_str),
        Some("oss-cn-hangzhou.aliyuncs.com")
    );
    assert_eq!(output.get(oss::BACKEND_OSS_ACCESS_KEY).map(String::as_str), Some("ak"));
    assert_eq!(output.get(oss::BACKEND_OSS_SECRET_KEY).map(String::as_str), Some("sk"));
    assert_eq!(output.len(), 5);
}

#[test]
fn test_transform_without_mapped_keys_is_identity() {
    let fixture = PropsFixture::new();
    let input = props(&[
        ("table.write.buffer-size", "256mb"),
        ("lock.enabled", "true"),
        ("", "empty-key"),
    ]);
    assert_eq!(fixture.metadata.transform(&input), input);
    assert!(fixture.metadata.transform(&props(&[])).is_empty());
}

#[test]
fn test_unknown_keys_pass_through() {
    let fixture = PropsFixture::new();
    let output = fixture.pipeline(&[
        ("catalog-backend", "filesystem"),
        ("warehouse", "/wh"),
        ("table.write.buffer-size", "256mb"),
    ]);
    assert_eq!(
        output.get("table.write.buffer-size").map(String::as_str),
        Some("256mb")
    );

    let strict = PropsFixture::with_config(RegistryConfig::strict());
    assert_eq!(
        strict.assert_invalid(&[
            ("catalog-backend", "filesystem"),
            ("warehouse", "/wh"),
            ("table.write.buffer-size", "256mb"),
        ]),
        PropertyError::UnknownProperty("table.write.buffer-size".to_string())
    );
}

#[test]
fn test_kerberos_requires_principal_and_keytab() {
    let fixture = PropsFixture::new();
    let base = [
        ("catalog-backend", "hive"),
        ("warehouse", "hdfs://nn/wh"),
        (authentication::AUTH_TYPE, "kerberos"),
    ];

    let error = fixture.assert_invalid(&base);
    assert_eq!(
        error,
        PropertyError::MissingRequiredProperty(kerberos::KEYTAB_URI.to_string())
    );

    let mut with_keytab = base.to_vec();
    with_keytab.push((kerberos::KEYTAB_URI, "file:///etc/hive.keytab"));
    assert_eq!(
        fixture.assert_invalid(&with_keytab),
        PropertyError::MissingRequiredProperty(kerberos::PRINCIPAL.to_string())
    );

    with_keytab.push((kerberos::PRINCIPAL, "hive/_HOST@EXAMPLE.COM"));
    let validated = fixture.assert_valid(&with_keytab);
    assert_eq!(
        validated.get(kerberos::CHECK_INTERVAL_SEC),
        Some(&TypedValue::Integer(kerberos::DEFAULT_CHECK_INTERVAL_SEC))
    );

    let output = fixture.metadata.transform_validated(&validated);
    assert_eq!(
        output.get(kerberos::PRINCIPAL).map(String::as_str),
        Some("hive/_HOST@EXAMPLE.COM")
    );
    assert!(!output.contains_key(kerberos::CHECK_INTERVAL_SEC));
}

#[test]
fn test_simple_auth_needs_no_kerberos_keys() {
    let fixture = PropsFixture::new();
    let validated = fixture.assert_valid(&[("catalog-backend", "hive"), ("warehouse", "/wh")]);
    assert_eq!(
        validated.get(authentication::AUTH_TYPE),
        Some(&TypedValue::Enum("simple".to_string()))
    );
    assert_eq!(
        validated.get(authentication::IMPERSONATION_ENABLE),
        Some(&TypedValue::Boolean(false))
    );
}

#[test]
fn test_invalid_numeric_value() {
    let fixture = PropsFixture::new();
    let error = fixture.assert_invalid(&[
        ("catalog-backend", "hive"),
        ("warehouse", "/wh"),
        (kerberos::FETCH_TIMEOUT_SEC, "a minute"),
    ]);
    assert_eq!(
        error,
        PropertyError::InvalidPropertyType {
            name: kerberos::FETCH_TIMEOUT_SEC.to_string(),
            expected: "integer".to_string(),
            got: "a minute".to_string(),
        }
    );
}

#[test]
fn test_alter_rejects_immutable_backend_change() {
    let fixture = PropsFixture::new();
    let current = props(&[("catalog-backend", "jdbc"), ("warehouse", "/wh")]);

    let error = fixture
        .metadata
        .validate_alter(&current, &[PropertyChange::set("catalog-backend", "hive")])
        .unwrap_err();
    assert_eq!(
        error,
        PropertyError::ImmutablePropertyModified("catalog-backend".to_string())
    );
}

#[test]
fn test_alter_then_transform() {
    let fixture = PropsFixture::new();
    let current = props(&[
        ("catalog-backend", "filesystem"),
        ("warehouse", "/wh"),
        (s3::S3_ENDPOINT, "http://old:9000"),
    ]);

    let validated = fixture
        .metadata
        .validate_alter(
            &current,
            &[
                PropertyChange::set(s3::S3_ENDPOINT, "http://new:9000"),
                PropertyChange::set(s3::S3_ACCESS_KEY_ID, "ak"),
                PropertyChange::remove("warehouse-comment"),
            ],
        )
        .unwrap();
    let output = fixture.metadata.transform_validated(&validated);

    assert_eq!(
        output.get(s3::BACKEND_S3_ENDPOINT).map(String::as_str),
        Some("http://new:9000")
    );
    assert_eq!(output.get(s3::BACKEND_S3_ACCESS_KEY).map(String::as_str), Some("ak"));
    assert!(!output.contains_key(s3::BACKEND_S3_SECRET_KEY));
    assert_eq!(current.get(s3::S3_ENDPOINT).map(String::as_str), Some("http://old:9000"));
}

#[test]
fn test_alter_setting_absent_immutable_key() {
    let fixture = PropsFixture::new();
    let current = props(&[("catalog-backend", "hive"), ("warehouse", "/wh")]);

    let error = fixture
        .metadata
        .validate_alter(&current, &[PropertyChange::set(authentication::AUTH_TYPE, "kerberos")])
        .unwrap_err();
    assert_eq!(
        error,
        PropertyError::ImmutablePropertyModified(authentication::AUTH_TYPE.to_string())
    );
}

#[test]
fn test_padded_integer_is_rejected() {
    let fixture = PropsFixture::new();
    let error = fixture.assert_invalid(&[
        ("catalog-backend", "hive"),
        ("warehouse", "/wh"),
        (kerberos::CHECK_INTERVAL_SEC, " 15 "),
    ]);
    assert_eq!(
        error,
        PropertyError::InvalidPropertyType {
            name: kerberos::CHECK_INTERVAL_SEC.to_string(),
            expected: "integer".to_string(),
            got: " 15 ".to_string(),
        }
    );

    let output = fixture.pipeline(&[
        ("catalog-backend", "hive"),
        ("warehouse", "/wh"),
        (kerberos::CHECK_INTERVAL_SEC, "15"),
    ]);
    assert_eq!(
        output.get(kerberos::CHECK_INTERVAL_SEC).map(String::as_str),
        Some("15")
    );
}

#[test]
fn test_alter_to_default_auth_type_is_accepted() {
    let fixture = PropsFixture::new();
    let current = props(&[("catalog-backend", "hive"), ("warehouse", "/wh")]);

    let validated = fixture
        .metadata
        .validate_alter(
            &current,
            &[PropertyChange::set(authentication::AUTH_TYPE, authentication::AUTH_SIMPLE)],
        )
        .unwrap();
    assert_eq!(
        validated.get(authentication::AUTH_TYPE),
        Some(&TypedValue::Enum("simple".to_string()))
    );
}
