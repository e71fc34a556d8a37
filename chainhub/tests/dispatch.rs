//! End-to-end dispatch across both protocol families.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chainhub::adapter::svm::Pubkey;
use chainhub::{
    AdapterFactories, ChainHub, ChainRegistry, ChainSpec, ChainsConfig, Connectivity, Error,
    EvmAdapter, EvmChainSpec, Protocol, SvmAdapter, SvmChainSpec,
};

const MESSENGER_CONTRACT: &str = "0x4200000000000000000000000000000000000007";
const MESSENGER_PROGRAM: &str = "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr";

fn registry() -> ChainRegistry {
    let mut chains = HashMap::new();
    chains.insert(
        "base".to_owned(),
        ChainSpec::Evm(EvmChainSpec {
            rpc: "https://mainnet.base.org".to_owned(),
            contracts: HashMap::from([("messenger".to_owned(), MESSENGER_CONTRACT.to_owned())]),
        }),
    );
    chains.insert(
        "solana".to_owned(),
        ChainSpec::Svm(SvmChainSpec {
            rpc: "https://api.mainnet-beta.solana.com".to_owned(),
            programs: HashMap::from([("messenger".to_owned(), MESSENGER_PROGRAM.to_owned())]),
        }),
    );
    ChainRegistry::new(ChainsConfig(chains))
}

fn hub_with(factories: AdapterFactories) -> ChainHub {
    let registry = registry();
    let connectivity = Arc::new(Connectivity::from_registry(&registry).unwrap());
    ChainHub::new(registry, connectivity, factories)
}

#[test]
fn partial_factory_map_resolves_only_its_protocols() {
    let mut factories = AdapterFactories::new();
    factories.register(Protocol::Evm, EvmAdapter::boxed);
    let hub = hub_with(factories);

    let adapter = hub.adapter("base").unwrap();
    assert_eq!(adapter.protocol(), Protocol::Evm);

    let err = hub.adapter("solana").unwrap_err();
    assert!(matches!(err, Error::UnsupportedProtocol(Protocol::Svm)));

    // One unresolvable chain fails the whole batch.
    assert!(hub.adapters().is_err());
}

#[test]
fn resolved_adapters_share_one_connectivity_object() {
    let hub = hub_with(AdapterFactories::standard());
    let adapters = hub.adapters().unwrap();
    let names: HashSet<&str> = adapters.keys().map(String::as_str).collect();
    assert_eq!(names, HashSet::from(["base", "solana"]));

    for adapter in adapters.values() {
        let url = adapter
            .connectivity()
            .endpoint("base")
            .unwrap()
            .to_string();
        assert_eq!(url, "https://mainnet.base.org/");
    }
}

#[tokio::test]
async fn batch_dispatch_routes_per_protocol() {
    let hub = hub_with(AdapterFactories::standard());
    let hub_ref = &hub;

    let results = hub
        .adapter_map(|name, adapter| async move {
            let metadata = hub_ref.metadata(&name)?;
            match adapter.protocol() {
                Protocol::Evm => {
                    let contract = metadata
                        .spec
                        .address("messenger")
                        .ok_or_else(|| Error::config("missing messenger contract"))?;
                    Ok(contract.to_owned())
                }
                Protocol::Svm => {
                    let program: Pubkey = metadata
                        .spec
                        .address("messenger")
                        .ok_or_else(|| Error::config("missing messenger program"))?
                        .parse()
                        .map_err(Error::other)?;
                    let (pda, _) = SvmAdapter::derive_program_address(&[b"config"], &program)?;
                    Ok(pda.to_string())
                }
            }
        })
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results["base"], MESSENGER_CONTRACT);

    // The instruction-model result is the deterministic PDA.
    let program: Pubkey = MESSENGER_PROGRAM.parse().unwrap();
    let (expected, _) = SvmAdapter::derive_program_address(&[b"config"], &program).unwrap();
    assert_eq!(results["solana"], expected.to_string());
}
