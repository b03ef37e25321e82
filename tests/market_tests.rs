//! Market lookup, MIC aliasing, and `replaced_by` redirection, modeled on
//! the Johannesburg Stock Exchange's derivatives-market alias.

use std::sync::Arc;

use trading_hours_engine::cancel::CancelToken;
use trading_hours_engine::finid::FinId;
use trading_hours_engine::models::Market;
use trading_hours_engine::store::{InMemoryStore, MarketRecord, MicMappingRecord, Store};

fn jse_safex() -> MarketRecord {
    MarketRecord {
        fin_id: FinId::parse("ZA.JSE.SAFEX").unwrap(),
        exchange_name: "Johannesburg Stock Exchange".to_string(),
        market_name: "South African Futures Exchange".to_string(),
        security_group: None,
        timezone: "Africa/Johannesburg".to_string(),
        weekend_definition: "Sat-Sun".to_string(),
        mic: Some("XSAF".to_string()),
        acronym: "SAFEX".to_string(),
        asset_type: Some("Derivatives".to_string()),
        memo: None,
        permanently_closed: false,
        replaced_by: Some(FinId::parse("ZA.JSE.EQUITIES.DRV").unwrap()),
    }
}

fn jse_equities_drv() -> MarketRecord {
    MarketRecord {
        fin_id: FinId::parse("ZA.JSE.EQUITIES.DRV").unwrap(),
        exchange_name: "Johannesburg Stock Exchange".to_string(),
        market_name: "JSE Equity Derivatives".to_string(),
        security_group: None,
        timezone: "Africa/Johannesburg".to_string(),
        weekend_definition: "Sat-Sun".to_string(),
        mic: Some("XJSE".to_string()),
        acronym: "JSE".to_string(),
        asset_type: Some("Derivatives".to_string()),
        memo: None,
        permanently_closed: false,
        replaced_by: None,
    }
}

fn jse_store() -> Arc<dyn Store> {
    let store = InMemoryStore::new();
    store.add_market(jse_safex());
    store.add_market(jse_equities_drv());
    store.add_mic_mapping(MicMappingRecord {
        mic: "XSAF".to_string(),
        fin_id: FinId::parse("ZA.JSE.SAFEX").unwrap(),
    });
    Arc::new(store)
}

#[test]
fn scenario_4_mic_alias_follows_replaced_by_redirection() {
    let market = Market::get(jse_store(), "XSAF", true, &CancelToken::new())
        .unwrap()
        .unwrap();
    assert_eq!(market.fin_id().as_str(), "ZA.JSE.EQUITIES.DRV");
}

#[test]
fn finid_lookup_also_follows_redirection() {
    let market = Market::get(jse_store(), "ZA.JSE.SAFEX", true, &CancelToken::new())
        .unwrap()
        .unwrap();
    assert_eq!(market.fin_id().as_str(), "ZA.JSE.EQUITIES.DRV");
}

#[test]
fn redirection_is_single_hop_only() {
    // If ZA.JSE.EQUITIES.DRV itself pointed further, resolution should
    // still stop after the first hop -- no chained redirection.
    let store = InMemoryStore::new();
    store.add_market(jse_safex());
    let mut final_hop = jse_equities_drv();
    final_hop.replaced_by = Some(FinId::parse("ZA.JSE.TERTIARY").unwrap());
    store.add_market(final_hop);
    store.add_market(MarketRecord {
        fin_id: FinId::parse("ZA.JSE.TERTIARY").unwrap(),
        ..jse_equities_drv()
    });

    let market = Market::get(Arc::new(store), "ZA.JSE.SAFEX", true, &CancelToken::new())
        .unwrap()
        .unwrap();
    assert_eq!(market.fin_id().as_str(), "ZA.JSE.EQUITIES.DRV");
}

#[test]
fn self_redirecting_market_is_not_followed() {
    let store = InMemoryStore::new();
    store.add_market(MarketRecord {
        fin_id: FinId::parse("US.NYSE").unwrap(),
        exchange_name: "New York Stock Exchange".to_string(),
        market_name: "New York Stock Exchange".to_string(),
        security_group: None,
        timezone: "America/New_York".to_string(),
        weekend_definition: "Sat-Sun".to_string(),
        mic: Some("XNYS".to_string()),
        acronym: "NYSE".to_string(),
        asset_type: None,
        memo: None,
        permanently_closed: false,
        replaced_by: Some(FinId::parse("US.NYSE").unwrap()),
    });

    let market = Market::get(Arc::new(store), "US.NYSE", true, &CancelToken::new())
        .unwrap()
        .unwrap();
    assert_eq!(market.fin_id().as_str(), "US.NYSE");
}

#[test]
fn unknown_mic_returns_none() {
    let result = Market::get(jse_store(), "ZZZZ", true, &CancelToken::new()).unwrap();
    assert!(result.is_none());
}
