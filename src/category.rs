use serde::{Deserialize, Serialize};

pub const CATEGORY_COUNT: usize = 13;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Chance,
    Yacht,
    ThreeKind,
    FourKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Upper,
    Lower,
}

impl Category {
    /// Every category in scorecard order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Chance,
        Category::Yacht,
        Category::ThreeKind,
        Category::FourKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
    ];

    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Face value scored by an upper category, `None` for the lower section.
    pub fn face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    pub fn is_upper(self) -> bool {
        self.face().is_some()
    }

    pub fn section(self) -> Section {
        if self.is_upper() {
            Section::Upper
        } else {
            Section::Lower
        }
    }

    /// Name used on the JS side of the boundary.
    pub fn as_name(self) -> &'static str {
        match self {
            Category::Ones => "ones",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::Chance => "chance",
            Category::Yacht => "yacht",
            Category::ThreeKind => "threeKind",
            Category::FourKind => "fourKind",
            Category::FullHouse => "fullHouse",
            Category::SmallStraight => "smallStraight",
            Category::LargeStraight => "largeStraight",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Ones => "1",
            Category::Twos => "2",
            Category::Threes => "3",
            Category::Fours => "4",
            Category::Fives => "5",
            Category::Sixes => "6",
            Category::Chance => "チャンス",
            Category::Yacht => "ヨット",
            Category::ThreeKind => "スリーカード",
            Category::FourKind => "フォーカード",
            Category::FullHouse => "フルハウス",
            Category::SmallStraight => "ストレート（4連番）",
            Category::LargeStraight => "フルストレート（5連番）",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_index() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn sections_split_six_and_seven() {
        let upper = Category::ALL.iter().filter(|c| c.is_upper()).count();
        assert_eq!(upper, 6);
        assert_eq!(CATEGORY_COUNT - upper, 7);
        assert_eq!(&Category::ALL[..6], &Category::UPPER);
    }

    #[test]
    fn names_round_trip_and_reject_unknown() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.as_name()), Some(category));
        }
        assert_eq!(Category::from_name("bonus"), None);
        assert_eq!(Category::from_name("Yacht"), None);
    }

    #[test]
    fn serde_name_matches_wire_name() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_name()));
        }
    }
}
