//! Core loyalty engine: tier derivation, next-tier progress, and the
//! purchase/redemption arithmetic for the Peekaboo Stars program.
//!
//! Every operation is a pure function of its inputs; the hosting layer owns
//! the balance and persists the result of each transition.

use peekaboo_core::config::LoyaltyConfig;
use peekaboo_core::loyalty::{PurchaseOutcome, Tier, TierProgress};
use tracing::{debug, info};

/// Stars program engine — stateless computation over a points balance.
pub struct LoyaltyEngine {
    config: LoyaltyConfig,
}

impl LoyaltyEngine {
    pub fn new(config: &LoyaltyConfig) -> Self {
        info!(
            points_per_dinar = config.points_per_dinar,
            redemption_threshold = config.redemption_threshold,
            sprout = config.sprout_threshold,
            golden = config.golden_threshold,
            "Loyalty engine initialized"
        );
        Self {
            config: config.clone(),
        }
    }

    /// Inclusive minimum balance for a tier, from the rule table.
    pub fn threshold(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Seedling => 0,
            Tier::Sprout => self.config.sprout_threshold,
            Tier::GoldenMushroom => self.config.golden_threshold,
        }
    }

    /// The highest tier whose threshold is ≤ `balance`.
    pub fn current_tier(&self, balance: u32) -> Tier {
        if balance >= self.config.golden_threshold {
            Tier::GoldenMushroom
        } else if balance >= self.config.sprout_threshold {
            Tier::Sprout
        } else {
            Tier::Seedling
        }
    }

    /// Progress toward the next tier, or `None` once the top tier is reached.
    ///
    /// `points_needed` is floored at 0 and `progress_fraction` is clamped into
    /// [0, 1]; a balance read from a stale snapshot must never surface a
    /// negative or >1 value.
    pub fn next_tier_progress(&self, balance: u32) -> Option<TierProgress> {
        let current = self.current_tier(balance);
        let next = current.next()?;

        let floor = self.threshold(current);
        let ceiling = self.threshold(next);
        let span = ceiling.saturating_sub(floor).max(1) as f32;
        let fraction = ((balance as f32 - floor as f32) / span).clamp(0.0, 1.0);

        Some(TierProgress {
            next_tier: next,
            points_needed: ceiling.saturating_sub(balance),
            progress_fraction: fraction,
        })
    }

    /// Whether the balance covers one redemption.
    pub fn can_redeem(&self, balance: u32) -> bool {
        balance >= self.config.redemption_threshold
    }

    /// Execute one purchase against the stars program.
    ///
    /// Redemption is applied only when requested and covered by the balance:
    /// the charged price drops by 1 JD (never below 0) and the redemption cost
    /// leaves the balance before accrual. Stars then accrue on the amount
    /// actually charged. The result is pure data; the caller persists
    /// `new_balance`.
    pub fn apply_purchase(
        &self,
        balance: u32,
        numeric_price: f64,
        redeem_requested: bool,
    ) -> PurchaseOutcome {
        let redeemed = redeem_requested && self.can_redeem(balance);

        let (charged_price, remaining) = if redeemed {
            (
                (numeric_price - 1.0).max(0.0),
                balance - self.config.redemption_threshold,
            )
        } else {
            (numeric_price, balance)
        };

        let points_earned = (charged_price * f64::from(self.config.points_per_dinar)) as u32;
        let new_balance = remaining + points_earned;

        metrics::counter!("loyalty.stars_earned").increment(u64::from(points_earned));
        if redeemed {
            metrics::counter!("loyalty.redemptions").increment(1);
            metrics::counter!("loyalty.stars_redeemed")
                .increment(u64::from(self.config.redemption_threshold));
        }

        debug!(
            balance = balance,
            charged = charged_price,
            earned = points_earned,
            new_balance = new_balance,
            redeemed = redeemed,
            "Purchase applied"
        );

        PurchaseOutcome {
            new_balance,
            charged_price,
            points_earned,
            redeemed,
        }
    }

    pub fn config(&self) -> &LoyaltyConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> LoyaltyEngine {
        LoyaltyEngine::new(&LoyaltyConfig::default())
    }

    #[test]
    fn tier_boundaries() {
        let e = engine();
        assert_eq!(e.current_tier(0), Tier::Seedling);
        assert_eq!(e.current_tier(499), Tier::Seedling);
        assert_eq!(e.current_tier(500), Tier::Sprout);
        assert_eq!(e.current_tier(999), Tier::Sprout);
        assert_eq!(e.current_tier(1000), Tier::GoldenMushroom);
        assert_eq!(e.current_tier(5000), Tier::GoldenMushroom);
    }

    #[test]
    fn tier_is_monotonic_in_balance() {
        let e = engine();
        let mut last = e.current_tier(0);
        for balance in 0..1500 {
            let tier = e.current_tier(balance);
            assert!(tier >= last, "tier regressed at balance {}", balance);
            last = tier;
        }
    }

    #[test]
    fn progress_at_top_tier_is_terminal() {
        let e = engine();
        assert_eq!(e.next_tier_progress(1000), None);
        assert_eq!(e.next_tier_progress(250_000), None);
    }

    #[test]
    fn progress_between_thresholds_is_strictly_interior() {
        let e = engine();
        let p = e.next_tier_progress(250).unwrap();
        assert_eq!(p.next_tier, Tier::Sprout);
        assert_eq!(p.points_needed, 250);
        assert!(p.progress_fraction > 0.0 && p.progress_fraction < 1.0);

        let p = e.next_tier_progress(750).unwrap();
        assert_eq!(p.next_tier, Tier::GoldenMushroom);
        assert_eq!(p.points_needed, 250);
        assert!(p.progress_fraction > 0.0 && p.progress_fraction < 1.0);
    }

    #[test]
    fn progress_at_tier_floor_is_zero() {
        let e = engine();
        let p = e.next_tier_progress(500).unwrap();
        assert_eq!(p.progress_fraction, 0.0);
        assert_eq!(p.points_needed, 500);
    }

    #[test]
    fn purchase_without_redemption() {
        let e = engine();
        let outcome = e.apply_purchase(150, 7.0, false);
        assert_eq!(
            outcome,
            PurchaseOutcome {
                new_balance: 220,
                charged_price: 7.0,
                points_earned: 70,
                redeemed: false,
            }
        );
    }

    #[test]
    fn purchase_with_redemption() {
        let e = engine();
        let outcome = e.apply_purchase(150, 7.0, true);
        assert_eq!(outcome.charged_price, 6.0);
        assert_eq!(outcome.points_earned, 60);
        assert_eq!(outcome.new_balance, 110); // 150 - 100 + 60
        assert!(outcome.redeemed);
    }

    #[test]
    fn redemption_denied_below_threshold() {
        let e = engine();
        let with_flag = e.apply_purchase(50, 7.0, true);
        let without_flag = e.apply_purchase(50, 7.0, false);
        assert_eq!(with_flag, without_flag);
        assert!(!with_flag.redeemed);
    }

    #[test]
    fn discount_clamps_charged_price_at_zero() {
        let e = engine();
        let outcome = e.apply_purchase(100, 0.5, true);
        assert_eq!(outcome.charged_price, 0.0);
        assert_eq!(outcome.points_earned, 0);
        assert_eq!(outcome.new_balance, 0);
        assert!(outcome.redeemed);
    }

    #[test]
    fn earned_points_use_floor() {
        let e = engine();
        // 3.5 JD at 10 stars/JD earns exactly 35; 3.57 would floor to 35 too.
        assert_eq!(e.apply_purchase(0, 3.5, false).points_earned, 35);
        assert_eq!(e.apply_purchase(0, 3.57, false).points_earned, 35);
    }

    #[test]
    fn operations_are_idempotent_reads() {
        let e = engine();
        assert_eq!(e.current_tier(777), e.current_tier(777));
        assert_eq!(e.next_tier_progress(777), e.next_tier_progress(777));
    }

    #[test]
    fn new_balance_round_trips_into_tier_table() {
        let e = engine();
        let mut balance = 150;
        for _ in 0..20 {
            let outcome = e.apply_purchase(balance, 12.0, balance >= 100);
            balance = outcome.new_balance;
            let tier = e.current_tier(balance);
            assert!(balance >= e.threshold(tier));
            if let Some(next) = tier.next() {
                assert!(balance < e.threshold(next));
            }
        }
    }
}
