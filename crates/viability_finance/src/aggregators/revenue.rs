//! Revenue gains from better prices and higher output.

/// Revenue gained from quality premiums and fewer off-spec sales.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceImprovement {
    /// `current_revenue * quality_premium_pct / 100`.
    pub quality_premium_gain: f64,
    /// `current_revenue * off_spec_reduction_pct / 100`.
    pub off_spec_reduction_gain: f64,
    /// Sum of both gains.
    pub total_price_improvement: f64,
}

/// Revenue gained from producing more. Only meaningful for plants whose
/// sales are limited by production.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductionIncrease {
    /// Extra units per year.
    pub additional_production: f64,
    /// Extra units times unit price.
    pub additional_revenue: f64,
    /// Combined improvement in percent.
    pub total_improvement_pct: f64,
}

/// Price-side revenue gain.
pub fn price_improvement(
    current_revenue: f64,
    quality_premium_pct: f64,
    off_spec_reduction_pct: f64,
) -> PriceImprovement {
    let quality_premium_gain = current_revenue * (quality_premium_pct / 100.0);
    let off_spec_reduction_gain = current_revenue * (off_spec_reduction_pct / 100.0);
    PriceImprovement {
        quality_premium_gain,
        off_spec_reduction_gain,
        total_price_improvement: quality_premium_gain + off_spec_reduction_gain,
    }
}

/// Volume-side revenue gain.
///
/// The three improvement percentages are additive.
pub fn production_increase(
    current_production: f64,
    unit_price: f64,
    capacity_improvement_pct: f64,
    downtime_reduction_pct: f64,
    cycle_time_reduction_pct: f64,
) -> ProductionIncrease {
    let improvement =
        (capacity_improvement_pct + downtime_reduction_pct + cycle_time_reduction_pct) / 100.0;
    let additional_production = current_production * improvement;
    ProductionIncrease {
        additional_production,
        additional_revenue: additional_production * unit_price,
        total_improvement_pct: improvement * 100.0,
    }
}

/// Total annual revenue enhancement.
pub fn total_revenue_enhancement(
    price: &PriceImprovement,
    production: Option<&ProductionIncrease>,
) -> f64 {
    price.total_price_improvement + production.map_or(0.0, |p| p.additional_revenue)
}

/// Volume inputs for [`production_increase`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProductionInputs {
    /// Current annual production volume.
    pub current_production: f64,
    /// Price per unit.
    pub unit_price: f64,
    /// Capacity increase in percent.
    pub capacity_improvement_pct: f64,
    /// Production gained from less downtime, in percent.
    pub downtime_reduction_pct: f64,
    /// Production gained from shorter cycles, in percent.
    pub cycle_time_reduction_pct: f64,
}

/// Revenue inputs for the financial-impact assessment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RevenueInputs {
    /// Current annual revenue.
    pub current_revenue: f64,
    /// Quality premium in percent. Revenue enhancement is only assessed
    /// when this is positive.
    pub quality_premium_pct: f64,
    /// Revenue recovered from off-spec reduction, in percent.
    pub off_spec_reduction_pct: f64,
    /// Optional volume gains.
    pub production: Option<ProductionInputs>,
}

/// Price and volume gains together.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevenueEnhancement {
    /// Price-side gain.
    pub price_improvement: PriceImprovement,
    /// Volume-side gain, when production inputs were given.
    pub production_increase: Option<ProductionIncrease>,
    /// Annual total of both.
    pub total_annual_enhancement: f64,
}

impl RevenueInputs {
    /// Evaluate the revenue gains, or `None` when there is no quality premium.
    pub fn assess(&self) -> Option<RevenueEnhancement> {
        if self.quality_premium_pct <= 0.0 {
            return None;
        }
        let price = price_improvement(
            self.current_revenue,
            self.quality_premium_pct,
            self.off_spec_reduction_pct,
        );
        let production = self.production.map(|p| {
            production_increase(
                p.current_production,
                p.unit_price,
                p.capacity_improvement_pct,
                p.downtime_reduction_pct,
                p.cycle_time_reduction_pct,
            )
        });
        Some(RevenueEnhancement {
            price_improvement: price,
            production_increase: production,
            total_annual_enhancement: total_revenue_enhancement(&price, production.as_ref()),
        })
    }
}
