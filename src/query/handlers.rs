// region:    --- Imports
use super::filters::{FilterState, SortOption, TypeFilter};
use super::queries::{AUTOMOBILE_CATEGORIES, PROPERTY_CATEGORIES};
use crate::auction::Auction;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use tracing::debug;

// endregion: --- Imports

// region:    --- Query Handlers

/// 목록 필터링 및 정렬
/// 입력 목록은 변경하지 않고 새 목록을 반환한다. 정렬은 안정 정렬이다.
pub fn apply_filters(
    auctions: &[Auction],
    filters: &FilterState,
    now: DateTime<Utc>,
) -> Vec<Auction> {
    let keyword = filters.keyword.to_lowercase();

    let mut result: Vec<Auction> = auctions
        .iter()
        .filter(|auction| {
            matches_keyword(auction, &keyword)
                && filters.kind.matches(auction.kind)
                && (filters.category.is_empty() || auction.category == filters.category)
                && filters.status.matches(auction, now)
        })
        .cloned()
        .collect();

    if let Some(compare) = comparator(filters.sort_by) {
        result.sort_by(compare);
    }

    debug!(
        "{:<12} --> 목록 조회: 전체 {}건 중 {}건 ({:?})",
        "Query",
        auctions.len(),
        result.len(),
        filters
    );
    result
}

/// 종류별 분류 목록
pub fn available_categories(kind: TypeFilter) -> &'static [&'static str] {
    match kind {
        TypeFilter::All => &[],
        TypeFilter::Automobile => AUTOMOBILE_CATEGORIES,
        TypeFilter::Property => PROPERTY_CATEGORIES,
    }
}

// 키워드는 이미 소문자로 변환된 상태
fn matches_keyword(auction: &Auction, keyword: &str) -> bool {
    keyword.is_empty()
        || auction.title.to_lowercase().contains(keyword)
        || auction.description.to_lowercase().contains(keyword)
}

type Comparator = fn(&Auction, &Auction) -> Ordering;

fn comparator(sort_by: SortOption) -> Option<Comparator> {
    match sort_by {
        SortOption::Newest => Some(|a: &Auction, b: &Auction| b.created_at.cmp(&a.created_at)),
        SortOption::EndingSoon => Some(|a: &Auction, b: &Auction| a.ends_at.cmp(&b.ends_at)),
        SortOption::HighestBid => {
            Some(|a: &Auction, b: &Auction| b.current_bid.cmp(&a.current_bid))
        }
        SortOption::LowestBid => Some(|a: &Auction, b: &Auction| a.current_bid.cmp(&b.current_bid)),
        SortOption::SellerRating => Some(|a: &Auction, b: &Auction| {
            b.rating_or_zero().total_cmp(&a.rating_or_zero())
        }),
        SortOption::Unsorted => None,
    }
}

// endregion: --- Query Handlers

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::{AuctionStatus, AuctionType};
    use crate::query::filters::StatusFilter;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn auction(id: &str, current_bid: i64, status: AuctionStatus) -> Auction {
        Auction {
            id: id.to_string(),
            title: format!("Listing {}", id),
            description: "Plain description".to_string(),
            kind: AuctionType::Automobile,
            category: "Sedan".to_string(),
            starting_price: 0,
            current_bid,
            status,
            created_at: now() - Duration::days(1),
            ends_at: now() + Duration::days(3),
            seller_id: "s1".to_string(),
            seller_name: "Seller".to_string(),
            seller_rating: None,
            watchers: 0,
            bids: Vec::new(),
        }
    }

    fn ids(auctions: &[Auction]) -> Vec<&str> {
        auctions.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn defaults_return_active_newest_first_regardless_of_input_order() {
        let mut a = auction("a", 100, AuctionStatus::Active);
        a.created_at = now() - Duration::hours(5);
        let mut b = auction("b", 100, AuctionStatus::Active);
        b.created_at = now() - Duration::hours(1);
        let mut c = auction("c", 100, AuctionStatus::Ended);
        c.created_at = now();
        let mut d = auction("d", 100, AuctionStatus::Pending);
        d.created_at = now();

        let forward = vec![a.clone(), b.clone(), c.clone(), d.clone()];
        let backward = vec![d, c, b, a];
        let filters = FilterState::default();

        assert_eq!(ids(&apply_filters(&forward, &filters, now())), vec!["b", "a"]);
        assert_eq!(ids(&apply_filters(&backward, &filters, now())), vec!["b", "a"]);
    }

    #[test]
    fn keyword_matches_title_or_description_case_insensitively() {
        let mut a = auction("a", 1, AuctionStatus::Active);
        a.title = "2023 Tesla Model S".to_string();
        let mut b = auction("b", 1, AuctionStatus::Active);
        b.description = "Sold with a TESLA wall charger".to_string();
        let c = auction("c", 1, AuctionStatus::Active);
        let input = vec![a, b, c];

        let filters = FilterState::default()
            .with_keyword("tEsLa")
            .with_sort(SortOption::Unsorted);
        let result = apply_filters(&input, &filters, now());
        assert_eq!(ids(&result), vec!["a", "b"]);
        for auction in &result {
            let haystack = format!("{} {}", auction.title, auction.description).to_lowercase();
            assert!(haystack.contains("tesla"));
        }

        let everything = FilterState::default().with_sort(SortOption::Unsorted);
        assert_eq!(apply_filters(&input, &everything, now()).len(), 3);
    }

    #[test]
    fn type_and_category_are_exact_matches() {
        let mut car = auction("car", 1, AuctionStatus::Active);
        car.category = "SUV".to_string();
        let mut house = auction("house", 1, AuctionStatus::Active);
        house.kind = AuctionType::Property;
        house.category = "Residential".to_string();
        let input = vec![car, house];

        let properties = FilterState::default().with_type(TypeFilter::Property);
        assert_eq!(ids(&apply_filters(&input, &properties, now())), vec!["house"]);

        let suvs = FilterState::default()
            .with_type(TypeFilter::Automobile)
            .with_category("SUV");
        assert_eq!(ids(&apply_filters(&input, &suvs, now())), vec!["car"]);

        let lowercase = suvs.with_category("suv");
        assert!(apply_filters(&input, &lowercase, now()).is_empty());
    }

    #[test]
    fn ending_soon_keeps_active_auctions_inside_the_window() {
        let mut a = auction("A", 1, AuctionStatus::Active);
        a.ends_at = now() + Duration::hours(12);
        let mut b = auction("B", 1, AuctionStatus::Active);
        b.ends_at = now() + Duration::hours(48);
        let mut c = auction("C", 1, AuctionStatus::Ended);
        c.ends_at = now() + Duration::hours(1);

        let filters = FilterState::default().with_status(StatusFilter::EndingSoon);
        assert_eq!(ids(&apply_filters(&[a, b, c], &filters, now())), vec!["A"]);
    }

    #[test]
    fn ending_soon_excludes_both_boundaries() {
        let mut at_now = auction("now", 1, AuctionStatus::Active);
        at_now.ends_at = now();
        let mut at_window = auction("window", 1, AuctionStatus::Active);
        at_window.ends_at = now() + Duration::hours(24);
        let mut inside = auction("inside", 1, AuctionStatus::Active);
        inside.ends_at = now() + Duration::hours(24) - Duration::milliseconds(1);

        let filters = FilterState::default().with_status(StatusFilter::EndingSoon);
        let result = apply_filters(&[at_now, at_window, inside], &filters, now());
        assert_eq!(ids(&result), vec!["inside"]);
    }

    #[test]
    fn status_all_and_exact_status() {
        let input = vec![
            auction("a", 1, AuctionStatus::Active),
            auction("p", 1, AuctionStatus::Pending),
            auction("c", 1, AuctionStatus::Cancelled),
        ];
        let all = FilterState::default()
            .with_status(StatusFilter::All)
            .with_sort(SortOption::Unsorted);
        assert_eq!(ids(&apply_filters(&input, &all, now())), vec!["a", "p", "c"]);

        let cancelled = all.with_status(StatusFilter::Cancelled);
        assert_eq!(ids(&apply_filters(&input, &cancelled, now())), vec!["c"]);
    }

    #[test_case(SortOption::LowestBid, vec!["100", "300", "500"] ; "lowest bid ascending")]
    #[test_case(SortOption::HighestBid, vec!["500", "300", "100"] ; "highest bid descending")]
    #[test_case(SortOption::Unsorted, vec!["500", "100", "300"] ; "unsorted keeps input order")]
    fn sorts_by_current_bid(sort_by: SortOption, expected: Vec<&str>) {
        let input: Vec<Auction> = [500, 100, 300]
            .iter()
            .map(|bid| auction(&bid.to_string(), *bid, AuctionStatus::Active))
            .collect();
        let filters = FilterState::default().with_sort(sort_by);
        assert_eq!(ids(&apply_filters(&input, &filters, now())), expected);
    }

    #[test]
    fn highest_bid_is_non_increasing_and_stable_on_ties() {
        let input = vec![
            auction("first", 200, AuctionStatus::Active),
            auction("big", 900, AuctionStatus::Active),
            auction("second", 200, AuctionStatus::Active),
            auction("small", 50, AuctionStatus::Active),
        ];
        let filters = FilterState::default().with_sort(SortOption::HighestBid);
        let result = apply_filters(&input, &filters, now());
        assert_eq!(ids(&result), vec!["big", "first", "second", "small"]);
        assert!(result.windows(2).all(|w| w[0].current_bid >= w[1].current_bid));
    }

    #[test]
    fn ending_soon_sort_is_ascending_by_end_time() {
        let mut late = auction("late", 1, AuctionStatus::Active);
        late.ends_at = now() + Duration::days(9);
        let mut early = auction("early", 1, AuctionStatus::Active);
        early.ends_at = now() + Duration::hours(2);
        let filters = FilterState::default().with_sort(SortOption::EndingSoon);
        assert_eq!(ids(&apply_filters(&[late, early], &filters, now())), vec!["early", "late"]);
    }

    #[test]
    fn seller_rating_treats_missing_rating_as_zero() {
        let mut rated = auction("rated", 1, AuctionStatus::Active);
        rated.seller_rating = Some(4.5);
        let unrated = auction("unrated", 1, AuctionStatus::Active);
        let mut top = auction("top", 1, AuctionStatus::Active);
        top.seller_rating = Some(5.0);
        let mut zero = auction("zero", 1, AuctionStatus::Active);
        zero.seller_rating = Some(0.0);

        let filters = FilterState::default().with_sort(SortOption::SellerRating);
        let result = apply_filters(&[unrated, rated, zero, top], &filters, now());
        assert_eq!(ids(&result), vec!["top", "rated", "unrated", "zero"]);
    }

    #[test]
    fn applying_twice_is_idempotent_and_leaves_input_untouched() {
        let input = vec![
            auction("x", 300, AuctionStatus::Active),
            auction("y", 700, AuctionStatus::Active),
            auction("z", 10, AuctionStatus::Ended),
        ];
        let before = input.clone();
        let filters = FilterState::default().with_sort(SortOption::HighestBid);

        let first = apply_filters(&input, &filters, now());
        let second = apply_filters(&input, &filters, now());
        assert_eq!(first, second);
        assert_eq!(input, before);
    }

    #[test]
    fn categories_follow_type_filter() {
        assert!(available_categories(TypeFilter::All).is_empty());
        assert_eq!(
            available_categories(TypeFilter::Automobile),
            &["Sedan", "SUV", "Sports", "Classic", "Truck"]
        );
        assert_eq!(
            available_categories(TypeFilter::Property),
            &["Residential", "Commercial", "Land", "Industrial"]
        );
    }
}
// endregion: --- Tests
