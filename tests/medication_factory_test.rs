use anyhow::Result;
use pattern_catalog::{Medication, MedicationFactory, MedicationKind, PatternError};

#[test]
fn test_tablet() -> Result<()> {
    let tablet = MedicationFactory::new()
        .create(Some("TABLET"), &["Paracetamol", "500"])?
        .ok_or_else(|| anyhow::anyhow!("tablet not produced"))?;

    assert_eq!(
        tablet,
        Medication::Tablet {
            name: "Paracetamol".to_string(),
            dosage: 500
        }
    );
    assert_eq!(tablet.display_info(), "Tablet Medication: Paracetamol, Dosage: 500mg");
    Ok(())
}

#[test]
fn test_syrup() -> Result<()> {
    let syrup = MedicationFactory::new()
        .create(Some("SYRUP"), &["CoughSyrup", "Cherry"])?
        .ok_or_else(|| anyhow::anyhow!("syrup not produced"))?;

    assert_eq!(
        syrup,
        Medication::Syrup {
            name: "CoughSyrup".to_string(),
            flavor: "Cherry".to_string()
        }
    );
    assert_eq!(syrup.display_info(), "Syrup Medication: CoughSyrup, Flavor: Cherry");
    Ok(())
}

#[test]
fn test_injection() -> Result<()> {
    let injection = MedicationFactory::new()
        .create(Some("INJECTION"), &["Insulin", "10.0"])?
        .ok_or_else(|| anyhow::anyhow!("injection not produced"))?;

    assert_eq!(
        injection,
        Medication::Injection {
            name: "Insulin".to_string(),
            dosage: 10.0
        }
    );
    assert_eq!(injection.display_info(), "Injection Medication: Insulin, Dosage: 10.0ml");
    assert_eq!(injection.kind(), MedicationKind::Injection);
    Ok(())
}

#[test]
fn test_unknown_or_absent_type_produces_nothing() -> Result<()> {
    let factory = MedicationFactory::new();
    assert!(factory.create(Some("UNKNOWN"), &["Paracetamol", "500"])?.is_none());
    assert!(factory.create(None, &["Paracetamol", "500"])?.is_none());
    Ok(())
}

#[test]
fn test_tags_are_case_insensitive() -> Result<()> {
    let factory = MedicationFactory::new();
    for tag in ["tablet", "Tablet", "tAbLeT"] {
        let medication = factory.create(Some(tag), &["Aspirin", "100"])?;
        assert_eq!(medication.map(|m| m.kind()), Some(MedicationKind::Tablet));
    }
    Ok(())
}

#[test]
fn test_errors_are_surfaced() {
    let factory = MedicationFactory::new();

    let err = factory.create(Some("INJECTION"), &["Insulin"]).unwrap_err();
    assert!(matches!(err, PatternError::MissingField { index: 1, .. }));

    let err = factory
        .create(Some("INJECTION"), &["Insulin", "1,5"])
        .unwrap_err();
    assert!(matches!(err, PatternError::InvalidNumericField { .. }));
    assert!(err.to_string().contains("1,5"));

    let err = factory.create_strict("POWDER", &["Talc"]).unwrap_err();
    assert!(matches!(err, PatternError::UnknownType { .. }));
}
