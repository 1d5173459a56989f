use super::hand::Hand;
use super::rank::Rank;
use super::strength::Kickers;
use super::strength::Ranking;
use super::strength::Strength;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;

/// Bitwise evaluator for hands of five to seven cards.
///
/// The hand is shredded once into rank-multiplicity masks plus an optional
/// flush mask; every category test after that is a couple of u16 ops.
pub struct Evaluator {
    ranks: u16,
    pairs: u16,
    trips: u16,
    quads: u16,
    flush: Option<u16>,
}

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        let bits = u64::from(hand);
        let (pairs, trips, quads) = Rank::all()
            .into_iter()
            .map(|rank| (rank, (bits >> (u8::from(rank) * 4)) & 0xF))
            .map(|(rank, nibble)| (u16::from(rank), nibble.count_ones()))
            .fold((0, 0, 0), |(p, t, q), (bit, n)| match n {
                2 => (p | bit, t, q),
                3 => (p, t | bit, q),
                4 => (p, t, q | bit),
                _ => (p, t, q),
            });
        Self {
            ranks: u16::from(hand),
            pairs,
            trips,
            quads,
            flush: Suit::all()
                .iter()
                .map(|suit| hand.of(suit))
                .find(|mask| mask.count_ones() >= 5),
        }
    }
}

impl Evaluator {
    pub fn strength(&self) -> Strength {
        assert!(self.ranks != 0, "evaluating an empty hand");
        let ranking = self.ranking();
        Strength::from((ranking, self.kickers(ranking)))
    }

    fn ranking(&self) -> Ranking {
        if let Some(high) = self.flush.and_then(Self::straight) {
            return Ranking::StraightFlush(high);
        }
        if self.quads != 0 {
            return Ranking::FourOAK(Rank::hi(self.quads));
        }
        if self.trips != 0 {
            let trip = Rank::hi(self.trips);
            let rest = (self.trips & !u16::from(trip)) | self.pairs;
            if rest != 0 {
                return Ranking::FullHouse(trip, Rank::hi(rest));
            }
        }
        if let Some(suited) = self.flush {
            return Ranking::Flush(Rank::hi(suited));
        }
        if let Some(high) = Self::straight(self.ranks) {
            return Ranking::Straight(high);
        }
        if self.trips != 0 {
            return Ranking::ThreeOAK(Rank::hi(self.trips));
        }
        match self.pairs.count_ones() {
            0 => Ranking::HighCard(Rank::hi(self.ranks)),
            1 => Ranking::OnePair(Rank::hi(self.pairs)),
            _ => {
                let hi = Rank::hi(self.pairs);
                let lo = Rank::hi(self.pairs & !u16::from(hi));
                Ranking::TwoPair(hi, lo)
            }
        }
    }

    fn kickers(&self, ranking: Ranking) -> Kickers {
        let pool = match ranking {
            Ranking::Flush(high) => self.flush.unwrap_or_default() & !u16::from(high),
            Ranking::TwoPair(hi, lo) => self.ranks & !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(r)
            | Ranking::OnePair(r)
            | Ranking::ThreeOAK(r)
            | Ranking::FourOAK(r) => self.ranks & !u16::from(r),
            _ => 0,
        };
        Kickers::from(Self::top(pool, ranking.n_kickers()))
    }

    /// Keep only the `n` highest ranks of a mask.
    fn top(mut mask: u16, n: usize) -> u16 {
        while mask.count_ones() as usize > n {
            mask &= mask - 1;
        }
        mask
    }

    /// Highest rank ending a five-card run, ace-low wheel included.
    fn straight(mask: u16) -> Option<Rank> {
        let mut run = mask;
        run &= run << 1;
        run &= run << 1;
        run &= run << 1;
        run &= run << 1;
        if run & 0x1FFF != 0 {
            Some(Rank::hi(run))
        } else if mask & WHEEL == WHEEL {
            Some(Rank::Five)
        } else {
            None
        }
    }
}
