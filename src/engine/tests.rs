use super::*;
use crate::{Variant, Version};

/// Drains `n` UUIDs through the [`Engine`] interface.
fn drain<E: Engine>(engine: &mut E, n: usize) -> Result<Vec<Uuid>, E::Error> {
    (0..n).map(|_| engine.try_generate()).collect()
}

/// Parses engine names
#[test]
fn parses_engine_names() {
    let cases = [
        ("address", EngineKind::Address),
        ("V1", EngineKind::Address),
        ("random", EngineKind::Random),
        ("v4", EngineKind::Random),
        ("System", EngineKind::System),
    ];
    for (text, kind) in cases {
        assert_eq!(text.parse::<EngineKind>(), Ok(kind));
    }
    for kind in [EngineKind::Address, EngineKind::Random, EngineKind::System] {
        assert_eq!(kind.to_string().parse::<EngineKind>(), Ok(kind));
    }

    let err = "mac".parse::<EngineKind>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown engine \"mac\"; expected one of \"address\", \"random\", \"system\""
    );
}

/// Defaults to the random engine
#[test]
fn defaults_to_the_random_engine() {
    let config = Config::default();
    assert_eq!(config.engine, EngineKind::Random);
    let g = Generator::from_config(&config).unwrap();
    assert_eq!(g.kind(), EngineKind::Random);
}

/// Builds the configured address engine
#[test]
fn builds_the_configured_address_engine() {
    let node = [0x02, 0x00, 0x5e, 0x10, 0x00, 0x01];
    let mut g = Generator::from_config(&Config {
        engine: EngineKind::Address,
        node: Some(node),
        clock_seq: Some(0x0abc),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(g.kind(), EngineKind::Address);

    let samples = drain(&mut g, 1_000).unwrap();
    for w in samples.windows(2) {
        assert!(w[0] < w[1]);
    }
    for e in &samples {
        assert_eq!(e.node(), node);
        assert_eq!(e.clock_seq(), 0x0abc);
        assert_eq!(e.version(), Some(Version::TimeBased));
    }
}

/// Replays the configured seed
#[test]
fn replays_the_configured_seed() {
    let config = Config {
        seed: Some(2024),
        ..Default::default()
    };
    let mut a = Generator::from_config(&config).unwrap();
    let mut b = Generator::from_config(&config).unwrap();
    assert_eq!(drain(&mut a, 100).unwrap(), drain(&mut b, 100).unwrap());
    assert_eq!(
        a.generate().unwrap(),
        RandomEngine::with_seed(2024).nth(100).unwrap()
    );
}

/// Uses the host address unless a node is configured
#[test]
fn uses_the_host_address_unless_a_node_is_configured() {
    match Generator::new(EngineKind::Address) {
        Ok(g) => assert_eq!(g.kind(), EngineKind::Address),
        Err(err) => assert!(matches!(
            err,
            EngineError::NodeUnavailable | EngineError::NodeLookup(_)
        )),
    }
}

/// Generates through every engine kind
#[cfg(any(target_os = "linux", windows))]
#[test]
fn generates_through_every_engine_kind() {
    let engines = [
        Generator::Address(AddressEngine::with_random_node()),
        Generator::new(EngineKind::Random).unwrap(),
        Generator::new(EngineKind::System).unwrap(),
    ];
    for mut g in engines {
        let e = g.generate().unwrap();
        assert!(e.has_value());
        assert_eq!(e.variant(), Variant::Rfc4122);
    }
}

/// Reports infallible engines through the common interface
#[test]
fn reports_infallible_engines_through_the_common_interface() {
    let mut address = AddressEngine::with_random_node();
    let mut random = RandomEngine::new();
    let a: Result<Vec<Uuid>, std::convert::Infallible> = drain(&mut address, 10);
    let r: Result<Vec<Uuid>, std::convert::Infallible> = drain(&mut random, 10);
    assert_eq!(a.map(|v| v.len()), Ok(10));
    assert_eq!(r.map(|v| v.len()), Ok(10));
}

/// Formats engine errors
#[test]
fn formats_engine_errors() {
    assert_eq!(
        EngineError::NodeUnavailable.to_string(),
        "no network hardware address available for the node identifier"
    );
    let err = EngineError::from(Uuid::parse("x").unwrap_err());
    assert_eq!(
        err.to_string(),
        "native UUID facility returned a malformed value: invalid string length 1; expected 36 or 32"
    );
}

#[cfg(feature = "serde")]
mod serde_config {
    use super::*;

    /// Reads configuration documents
    #[test]
    fn reads_configuration_documents() {
        let config: Config =
            serde_json::from_str(r#"{"engine": "address", "node": [2, 0, 94, 16, 0, 1]}"#)
                .unwrap();
        assert_eq!(
            config,
            Config {
                engine: EngineKind::Address,
                node: Some([2, 0, 94, 16, 0, 1]),
                ..Default::default()
            }
        );

        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        assert!(serde_json::from_str::<Config>(r#"{"engine": "mac"}"#).is_err());
        assert!(serde_json::from_str::<Config>(r#"{"engnie": "random"}"#).is_err());
    }

    /// Writes configuration documents
    #[test]
    fn writes_configuration_documents() {
        let config = Config {
            engine: EngineKind::System,
            seed: Some(1),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"engine":"system","seed":1,"node":null,"clock_seq":null}"#
        );
    }
}
