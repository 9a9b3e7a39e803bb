//! Full analysis: regression, then viscosity, then molecular diameter.

use ak_core::{DynVisc, Length, ensure_positive, m, pa_s};
use ak_gases::GasProperties;
use tracing::{debug, warn};

use crate::{
    ApparatusGeometry, DiameterModel, FitResult, KernelResult, Sample, fit_samples,
    viscosity_from_slope,
};

/// Inputs for one analysis run.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    pub samples: &'a [Sample],
    pub gas: &'a GasProperties,
    pub temperature_k: f64,
    pub geometry: ApparatusGeometry,
    pub model: DiameterModel,
}

impl<'a> AnalysisRequest<'a> {
    /// Request using the standard apparatus and the kinetic diameter model.
    pub fn new(samples: &'a [Sample], gas: &'a GasProperties, temperature_k: f64) -> Self {
        Self {
            samples,
            gas,
            temperature_k,
            geometry: ApparatusGeometry::default(),
            model: DiameterModel::default(),
        }
    }

    pub fn with_geometry(mut self, geometry: ApparatusGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_model(mut self, model: DiameterModel) -> Self {
        self.model = model;
        self
    }
}

/// Derived gas properties. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    /// Dynamic viscosity [Pa·s]
    pub viscosity: f64,
    /// Goodness of fit of the underlying regression; NaN when undefined
    pub r_squared: f64,
    /// Effective molecular diameter [m]
    pub molecular_diameter: f64,
}

impl AnalysisResult {
    pub fn viscosity_quantity(&self) -> DynVisc {
        pa_s(self.viscosity)
    }

    pub fn molecular_diameter_quantity(&self) -> Length {
        m(self.molecular_diameter)
    }

    pub fn viscosity_micropascal_seconds(&self) -> f64 {
        self.viscosity * 1e6
    }

    pub fn diameter_nanometres(&self) -> f64 {
        self.molecular_diameter * 1e9
    }

    /// R² as a percentage, or `None` when undefined.
    pub fn r_squared_percent(&self) -> Option<f64> {
        (!self.r_squared.is_nan()).then(|| self.r_squared * 100.0)
    }
}

/// Result of [`analyze`] together with the line it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub fit: FitResult,
    pub result: AnalysisResult,
}

/// Run the complete analysis for one request.
///
/// Each call is independent; nothing is cached or shared between calls.
pub fn analyze(request: &AnalysisRequest<'_>) -> KernelResult<Analysis> {
    let temperature_k = ensure_positive(request.temperature_k, "temperature")?;
    request.geometry.validate()?;

    let fit = fit_samples(request.samples).inspect_err(|err| {
        warn!(gas = request.gas.key(), %err, "regression rejected samples");
    })?;
    let viscosity = viscosity_from_slope(fit.slope, &request.geometry).inspect_err(|err| {
        warn!(gas = request.gas.key(), slope = fit.slope, %err, "fit is not physical");
    })?;
    let molecular_diameter = request
        .model
        .diameter(viscosity, request.gas.molar_mass, temperature_k)?;

    debug!(
        gas = request.gas.key(),
        temperature_k,
        model = request.model.key(),
        viscosity,
        molecular_diameter,
        r_squared = fit.r_squared,
        "analysis complete"
    );

    Ok(Analysis {
        fit,
        result: AnalysisResult {
            viscosity,
            r_squared: fit.r_squared,
            molecular_diameter,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KernelError, evenly_spaced, ideal_samples};
    use ak_gases::Gas;

    #[test]
    fn ideal_argon_run_recovers_reference() {
        let ar = Gas::Ar.properties();
        let times = evenly_spaced(300.0, 20).unwrap();
        let samples = ideal_samples(
            &ApparatusGeometry::default(),
            ar.reference_viscosity,
            100_000.0,
            &times,
        )
        .unwrap();

        let analysis = analyze(&AnalysisRequest::new(&samples, ar, 298.15)).unwrap();
        let rel = (analysis.result.viscosity - ar.reference_viscosity).abs()
            / ar.reference_viscosity;
        assert!(rel < 1e-9, "relative error = {rel}");
        assert_eq!(analysis.result.r_squared, analysis.fit.r_squared);
    }

    #[test]
    fn custom_geometry_is_used() {
        let he = Gas::He.properties();
        let geometry = ApparatusGeometry::new(1.0e-4, 0.2, 1.0e-3);
        let times = evenly_spaced(600.0, 10).unwrap();
        let samples = ideal_samples(&geometry, he.reference_viscosity, 2.0e5, &times).unwrap();

        let with = analyze(&AnalysisRequest::new(&samples, he, 298.15).with_geometry(geometry))
            .unwrap();
        let without = analyze(&AnalysisRequest::new(&samples, he, 298.15)).unwrap();
        assert!((with.result.viscosity - he.reference_viscosity).abs() < 1e-12);
        assert!((without.result.viscosity - he.reference_viscosity).abs() > 1e-7);
    }

    #[test]
    fn model_choice_changes_only_diameter() {
        let n2 = Gas::N2.properties();
        let times = evenly_spaced(300.0, 6).unwrap();
        let samples =
            ideal_samples(&ApparatusGeometry::default(), 17.76e-6, 1e5, &times).unwrap();

        let request = AnalysisRequest::new(&samples, n2, 298.15);
        let kinetic = analyze(&request).unwrap();
        let hard = analyze(&request.with_model(DiameterModel::HardSphere)).unwrap();
        assert_eq!(kinetic.result.viscosity, hard.result.viscosity);
        assert!(hard.result.molecular_diameter > kinetic.result.molecular_diameter);
    }

    #[test]
    fn rising_pressure_is_physically_invalid() {
        let n2 = Gas::N2.properties();
        let samples = [
            Sample::new(0.0, 90_000.0),
            Sample::new(60.0, 95_000.0),
            Sample::new(120.0, 100_000.0),
        ];
        let err = analyze(&AnalysisRequest::new(&samples, n2, 298.15)).unwrap_err();
        assert!(matches!(err, KernelError::PhysicallyInvalid { .. }));
    }

    #[test]
    fn zero_temperature_is_invalid() {
        let n2 = Gas::N2.properties();
        let samples = [Sample::new(0.0, 1e5), Sample::new(60.0, 9e4)];
        assert_eq!(
            analyze(&AnalysisRequest::new(&samples, n2, 0.0)).unwrap_err(),
            KernelError::InvalidInput {
                what: "temperature"
            }
        );
    }

    #[test]
    fn result_unit_helpers() {
        let result = AnalysisResult {
            viscosity: 17.76e-6,
            r_squared: 0.99,
            molecular_diameter: 0.305e-9,
        };
        assert!((result.viscosity_micropascal_seconds() - 17.76).abs() < 1e-9);
        assert!((result.diameter_nanometres() - 0.305).abs() < 1e-9);
        assert!((ak_core::nanometres_of(result.molecular_diameter_quantity()) - 0.305).abs() < 1e-9);
        assert_eq!(result.r_squared_percent().map(|p| p.round()), Some(99.0));

        let undefined = AnalysisResult {
            r_squared: f64::NAN,
            ..result
        };
        assert_eq!(undefined.r_squared_percent(), None);
    }
}
