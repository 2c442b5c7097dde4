//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and the direct pairwise Newtonian
//! gravity term, working in length-scale units

use std::fmt;

use crate::simulation::states::{System, NVec3};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccelSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Direct n^2 Newtonian gravity in length-scale units
///
/// Positions are stored in units of `scale` meters, so the SI
/// acceleration `g * m / (scale * |r|)^2` picks up one more factor of
/// `scale` on conversion to units per second squared. That gives the
/// `scale^3` divisor below; changing `scale` must keep this cubic
/// relationship or apparent speed and scale drift apart.
///
/// Bodies are point masses: radius plays no role here. A pair at zero
/// separation contributes nothing (skipped, never NaN); there is no
/// other softening, and non-finite values from extreme inputs
/// propagate unchecked into later ticks.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant, SI
    pub scale: f64, // meters per length-scale unit
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        let scale3 = self.scale * self.scale * self.scale;

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            // bi: body i (left side of the pair)
            let bi = &sys.bodies[i];
            let xi = bi.x; // position of body i
            let mi = bi.m; // mass of body i

            for j in (i + 1)..n {
                // bj: body j (right side of the pair)
                let bj = &sys.bodies[j];

                // r is the displacement vector from i to j
                // If r points from i to j, then i feels a pull along +r,
                // j feels a pull along -r
                let r = bj.x - xi;

                // Squared separation distance |r|^2
                let r2 = r.dot(&r);

                // Coincident bodies: skip the pair instead of dividing
                // by zero
                if r2 == 0.0 {
                    continue;
                }

                // a = g * m / (scale^3 |r|^2) * r/|r|
                //   = g * m / (scale^3 |r|^3) * r
                let inv_r = r2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let coef = self.g * inv_r3 / scale3;

                // Equal and opposite contributions (Newton's third law
                // holds exactly at the force level)
                out[i] += coef * bj.m * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
