use crate::Probability;
use crate::Utility;
use crate::cards::Hole;
use crate::cards::Rank;

/// Expected value per unit bet of suited starting hands, heads-up.
/// Row is the lower rank from Two; entries run over higher ranks from one above it to Ace.
#[rustfmt::skip]
const SUITED: [&[Utility]; 13] = [
    &[-0.2803, -0.2634, -0.2430, -0.2466, -0.2369, -0.1946, -0.1517, -0.1032, -0.0524, 0.0034, 0.0642, 0.1476],
    &[-0.2272, -0.2061, -0.2093, -0.1993, -0.1825, -0.1347, -0.0861, -0.0354, 0.0204, 0.0811, 0.1644],
    &[-0.1709, -0.1733, -0.1630, -0.1460, -0.1228, -0.0694, -0.0186, 0.0371, 0.0977, 0.1807],
    &[-0.1373, -0.1265, -0.1091, -0.0856, -0.0557, -0.0003, 0.0554, 0.1159, 0.1985],
    &[-0.0926, -0.0751, -0.0514, -0.0212, 0.0121, 0.0723, 0.1328, 0.1981],
    &[-0.0413, -0.0174, 0.0128, 0.0465, 0.0860, 0.1580, 0.2197],
    &[0.0016, 0.0467, 0.0803, 0.1204, 0.1662, 0.2389],
    &[0.0806, 0.1132, 0.1533, 0.1998, 0.2556],
    &[0.1506, 0.1894, 0.2358, 0.2920],
    &[0.2052, 0.2513, 0.3079],
    &[0.2680, 0.3242],
    &[0.3409],
    &[],
];

/// Same as [`SUITED`] for offsuit hands, except each row starts at the pair.
#[rustfmt::skip]
const OFFSUIT: [&[Utility]; 13] = [
    &[0.0067, -0.3539, -0.3360, -0.3143, -0.3185, -0.3083, -0.2634, -0.2180, -0.1666, -0.1130, -0.0541, 0.0102, 0.0986],
    &[0.0739, -0.2971, -0.2747, -0.2784, -0.2680, -0.2503, -0.1996, -0.1481, -0.0945, -0.0356, -0.0285, 0.1169],
    &[0.1405, -0.2369, -0.2398, -0.2290, -0.2111, -0.1866, -0.1299, -0.0763, -0.0174, 0.0465, 0.1346],
    &[0.2065, -0.2011, -0.1898, -0.1714, -0.1466, -0.1150, -0.0564, 0.0024, 0.0663, 0.1539],
    &[0.2657, -0.1535, -0.1353, -0.1102, -0.0782, -0.0431, 0.0205, 0.0845, 0.1536],
    &[0.3247, -0.0990, -0.0740, -0.0418, -0.0064, 0.0353, 0.1037, 0.1768],
    &[0.3833, -0.0381, -0.0056, 0.0298, 0.0720, 0.1204, 0.1975],
    &[0.4411, 0.0306, 0.0650, 0.1072, 0.1562, 0.2155],
    &[0.5002, 0.1050, 0.1458, 0.1948, 0.2544],
    &[0.5494, 0.1627, 0.2114, 0.2713],
    &[0.5985, 0.2291, 0.2886],
    &[0.6479, 0.3064],
    &[0.7041],
];

/// Static preflop lookup.
///
/// The table stores the expected value per unit bet of a starting hand;
/// since a heads-up bet of B pays B·p − B·(1 − p), the win probability
/// falls out as p = (v + 1) / 2.
pub struct Preflop;

impl Preflop {
    /// Expected value per unit bet, in [-1, 1].
    pub fn value(hole: &Hole) -> Utility {
        let (lo, hi) = hole.ranks();
        let (lo, hi) = (u8::from(lo) as usize, u8::from(hi) as usize);
        match hole.suited() {
            true => SUITED[lo][hi - lo - 1],
            false => OFFSUIT[lo][hi - lo],
        }
    }
    /// Win probability implied by the table value.
    pub fn probability(hole: &Hole) -> Probability {
        (Self::value(hole) + 1.) / 2.
    }
    /// Value by ranks rather than cards. Errors on a suited pair.
    pub fn lookup(suited: bool, a: Rank, b: Rank) -> anyhow::Result<Utility> {
        let (lo, hi) = (u8::from(a.min(b)) as usize, u8::from(a.max(b)) as usize);
        match suited {
            true if lo == hi => Err(anyhow::anyhow!("no suited pair of {}", a)),
            true => Ok(SUITED[lo][hi - lo - 1]),
            false => Ok(OFFSUIT[lo][hi - lo]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shape() {
        for lo in 0..13 {
            assert_eq!(SUITED[lo].len(), 12 - lo);
            assert_eq!(OFFSUIT[lo].len(), 13 - lo);
        }
    }

    #[test]
    fn suited_ace_king() {
        let hole = Hole::try_from("Ks As").unwrap();
        assert_eq!(Preflop::value(&hole), 0.3409);
        assert!((Preflop::probability(&hole) - 0.67045).abs() < 1e-6);
    }

    #[test]
    fn pairs_and_offsuit() {
        assert_eq!(Preflop::value(&Hole::try_from("Ad Ac").unwrap()), 0.7041);
        assert_eq!(Preflop::value(&Hole::try_from("2d 2c").unwrap()), 0.0067);
        assert_eq!(Preflop::value(&Hole::try_from("7h 2c").unwrap()), -0.3083);
        assert_eq!(Preflop::value(&Hole::try_from("2c 7h").unwrap()), -0.3083);
    }

    #[test]
    fn probabilities_in_range() {
        for a in Rank::all() {
            for b in Rank::all() {
                for suited in [true, false] {
                    if let Ok(v) = Preflop::lookup(suited, a, b) {
                        let p = (v + 1.) / 2.;
                        assert!((0.0..=1.0).contains(&p));
                    }
                }
            }
        }
        assert!(Preflop::lookup(true, Rank::Nine, Rank::Nine).is_err());
    }
}
