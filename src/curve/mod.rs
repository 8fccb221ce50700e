mod setup;

pub use setup::{curve, CurveParams, CurveSetup};

use ark_ec::models::CurveConfig;
use ark_ec::twisted_edwards::{Affine, MontCurveConfig, Projective, TECurveConfig};
use ark_ff::MontFp;

pub use ark_ed_on_bn254::{Fq, Fr};

/// Order `l` of the prime subgroup generated by [`BabyJubjubConfig::GENERATOR`].
pub const SUBGROUP_ORDER: &str =
    "2736030358979909402780800718157159386076813972158567259200215660948447373041";

/// Baby Jubjub in the twisted Edwards form `168700 x^2 + y^2 = 1 + 168696 x^2 y^2`.
///
/// `ark-ed-on-bn254` ships the same curve rescaled to `a = 1`, so its affine coordinates
/// differ from what circuits and circomlib-style libraries exchange. This configuration keeps
/// the coordinates as they are seen on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BabyJubjubConfig;

pub type Point = Affine<BabyJubjubConfig>;
pub type PointProjective = Projective<BabyJubjubConfig>;

impl CurveConfig for BabyJubjubConfig {
    type BaseField = Fq;
    type ScalarField = Fr;

    const COFACTOR: &'static [u64] = &[8];
    /// 8^{-1} mod l
    const COFACTOR_INV: Fr =
        MontFp!("2394026564107420727433200628387514462817212225638746351800188703329891451411");
}

impl TECurveConfig for BabyJubjubConfig {
    const COEFF_A: Fq = MontFp!("168700");
    const COEFF_D: Fq = MontFp!("168696");
    const GENERATOR: Point = Point::new_unchecked(BASE8_X, BASE8_Y);

    type MontCurveConfig = BabyJubjubConfig;
}

// B y^2 = x^3 + A x^2 + x with A = 2(a + d) / (a - d), B = 4 / (a - d)
impl MontCurveConfig for BabyJubjubConfig {
    const COEFF_A: Fq = MontFp!("168698");
    const COEFF_B: Fq = MontFp!("1");

    type TECurveConfig = BabyJubjubConfig;
}

// Base8, the generator of the prime order subgroup
pub const BASE8_X: Fq =
    MontFp!("5299619240641551281634865583518297030282874472190772894086521144482721001553");
pub const BASE8_Y: Fq =
    MontFp!("16950150798460657717958625567821834550301663161624707787222815936182638968203");
