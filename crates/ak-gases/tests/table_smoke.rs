//! Gas table integration tests.

use ak_gases::{Gas, GasError, gas_table, lookup, sutherland_viscosity};

#[test]
fn every_table_entry_is_reachable_by_key_and_name() {
    for props in gas_table() {
        assert_eq!(lookup(props.key()).unwrap(), props);
        assert_eq!(lookup(props.name).unwrap(), props);
    }
}

#[test]
fn concurrent_readers_see_identical_records() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let gas = Gas::ALL[i % Gas::ALL.len()];
                let props = lookup(gas.key()).unwrap();
                (gas, *props)
            })
        })
        .collect();

    for handle in handles {
        let (gas, props) = handle.join().unwrap();
        assert_eq!(&props, gas.properties());
    }
}

#[test]
fn helium_is_more_viscous_than_nitrogen_but_lighter() {
    let he = Gas::He.properties();
    let n2 = Gas::N2.properties();
    assert!(he.molar_mass < n2.molar_mass);
    assert!(he.reference_viscosity > n2.reference_viscosity);

    let he_hot = sutherland_viscosity(he, 500.0).unwrap();
    let n2_hot = sutherland_viscosity(n2, 500.0).unwrap();
    assert!(he_hot > n2_hot, "he = {he_hot}, n2 = {n2_hot}");
}

#[test]
fn lookup_failure_reports_the_key() {
    match lookup("SF6") {
        Err(GasError::NotFound { key }) => assert_eq!(key, "SF6"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}
