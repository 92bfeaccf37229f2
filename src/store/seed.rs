/// 데모용 경매 데이터
/// 종료/등록 시각은 기준 시각(now) 기준 상대값
use crate::auction::{Auction, AuctionStatus, AuctionType, Bid, UserRole, Viewer};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// 데모 사용자
pub fn demo_viewer() -> Viewer {
    Viewer {
        id: "u_user".to_string(),
        name: "Jane Buyer".to_string(),
        role: UserRole::User,
    }
}

pub fn mock_auctions(now: DateTime<Utc>) -> Vec<Auction> {
    let mut tesla = listing(
        ("a1", "2023 Tesla Model S Plaid"),
        "Pristine condition, low mileage, full self-driving capability included. One owner.",
        (AuctionType::Automobile, "Sedan"),
        (80_000, 85_500),
        AuctionStatus::Active,
        (now - Duration::days(5), now + Duration::days(2)),
        ("s1", "Elon Fan", Some(4.5), 12),
    );
    tesla.bids = vec![
        history_bid("b1", "a1", ("u2", "SpeedRacer"), 82_000, (1, 10, 0)),
        history_bid("b2", "a1", ("u3", "EcoWarrior"), 85_500, (1, 12, 30)),
    ];

    let mut mustang = listing(
        ("a3", "1967 Ford Mustang Shelby GT500"),
        "Classic muscle car, fully restored. Original engine numbers matching.",
        (AuctionType::Automobile, "Classic"),
        (150_000, 185_000),
        AuctionStatus::Active,
        (now - Duration::days(20), now + Duration::hours(1)),
        ("s3", "Classic Collectors", Some(5.0), 128),
    );
    mustang.bids = vec![history_bid(
        "b3",
        "a3",
        ("u4", "V8Lover"),
        185_000,
        (2, 14, 15),
    )];

    vec![
        tesla,
        listing(
            ("a2", "Modern Downtown Loft"),
            "Spacious 2 bed, 2 bath loft in the heart of the city. Industrial chic design with exposed brick.",
            (AuctionType::Property, "Residential"),
            (450_000, 450_000),
            AuctionStatus::Active,
            (now - Duration::days(10), now + Duration::days(5)),
            ("s2", "Urban Living Realty", Some(4.9), 45),
        ),
        mustang,
        listing(
            ("a4", "Commercial Warehouse Space"),
            "Large industrial warehouse near the port. Ideal for logistics.",
            (AuctionType::Property, "Commercial"),
            (1_200_000, 0),
            AuctionStatus::Pending,
            (now - Duration::hours(1), now + Duration::days(10)),
            ("s4", "Logistics Pro", Some(4.2), 5),
        ),
        listing(
            ("a5", "2022 Porsche 911 GT3"),
            "Track-ready performance. Shark Blue, ceramic brakes, front axle lift.",
            (AuctionType::Automobile, "Sports"),
            (220_000, 245_000),
            AuctionStatus::Active,
            (now - Duration::days(3), now + Duration::days(1)),
            ("s5", "Track Day Motors", Some(4.7), 89),
        ),
        listing(
            ("a6", "Luxury Beachfront Villa"),
            "Private beach access, infinity pool, 5 bedrooms, smart home integration.",
            (AuctionType::Property, "Residential"),
            (3_500_000, 3_750_000),
            AuctionStatus::Active,
            (now - Duration::days(1), now + Duration::days(7)),
            ("s6", "Coastal Estates", Some(5.0), 210),
        ),
        listing(
            ("a7", "2020 Land Rover Defender 110"),
            "Adventure ready, fully equipped with explorer pack and roof rack.",
            (AuctionType::Automobile, "SUV"),
            (65_000, 68_000),
            AuctionStatus::Active,
            (now - Duration::days(4), now + Duration::days(3)),
            ("s7", "Overland Outfitters", Some(4.6), 34),
        ),
        listing(
            ("a8", "Development Land - 50 Acres"),
            "Prime development opportunity. Zoned for mixed-use. Utilities available at street.",
            (AuctionType::Property, "Land"),
            (850_000, 0),
            AuctionStatus::Active,
            (now - Duration::days(2), now + Duration::days(14)),
            ("s8", "Land Bank Corp", Some(4.0), 15),
        ),
    ]
}

fn listing(
    (id, title): (&str, &str),
    description: &str,
    (kind, category): (AuctionType, &str),
    (starting_price, current_bid): (i64, i64),
    status: AuctionStatus,
    (created_at, ends_at): (DateTime<Utc>, DateTime<Utc>),
    (seller_id, seller_name, seller_rating, watchers): (&str, &str, Option<f64>, u32),
) -> Auction {
    Auction {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        kind,
        category: category.to_string(),
        starting_price,
        current_bid,
        status,
        created_at,
        ends_at,
        seller_id: seller_id.to_string(),
        seller_name: seller_name.to_string(),
        seller_rating,
        watchers,
        bids: Vec::new(),
    }
}

fn history_bid(
    id: &str,
    auction_id: &str,
    (bidder_id, bidder_name): (&str, &str),
    amount: i64,
    (day, hour, minute): (u32, u32, u32),
) -> Bid {
    Bid {
        id: id.to_string(),
        auction_id: auction_id.to_string(),
        bidder_id: bidder_id.to_string(),
        bidder_name: bidder_name.to_string(),
        amount,
        timestamp: Utc
            .with_ymd_and_hms(2023, 10, day, hour, minute, 0)
            .single()
            .unwrap_or_default(),
    }
}
