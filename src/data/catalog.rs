//! Static channel catalog.
//!
//! The reference listing is compiled in. Analytics are expanded once when the
//! catalog is built and then only read.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::info;

use crate::data::dataset::{AnalyticsSource, MonthSpec, MonthStat, build_channel_analytics, reconstruct_baselines};
use crate::domain::{Channel, ChannelAnalytics, ChannelId, ChannelVideos, Seller, Video, estimated_revenue};
use crate::error::MarketError;

const LONG_THUMBNAIL: &str = "https://placehold.co/120x90/2c2c3e/ffffff?text=Vid";
const SHORT_THUMBNAIL: &str = "https://placehold.co/90x120/3e2c2c/ffffff?text=Short";

/// Raw inputs for one listed channel.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub channel: Channel,
    pub videos: ChannelVideos,
    pub analytics: AnalyticsSource,
}

/// In-memory, read-only store of listed channels.
#[derive(Debug, Clone)]
pub struct Catalog {
    channels: Vec<Channel>,
    videos: BTreeMap<ChannelId, ChannelVideos>,
    analytics: BTreeMap<ChannelId, ChannelAnalytics>,
}

impl Catalog {
    /// Build the compiled-in reference catalog.
    pub fn reference<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, MarketError> {
        Self::from_entries(rng, reference_entries())
    }

    pub fn from_entries<R: Rng + ?Sized>(rng: &mut R, entries: Vec<CatalogEntry>) -> Result<Self, MarketError> {
        let mut channels = Vec::with_capacity(entries.len());
        let mut videos = BTreeMap::new();
        let mut analytics = BTreeMap::new();

        for entry in entries {
            let id = entry.channel.id;
            analytics.insert(id, build_channel_analytics(rng, &entry.analytics)?);
            videos.insert(id, entry.videos);
            channels.push(entry.channel);
        }

        info!(channels = channels.len(), "catalog ready");
        Ok(Self {
            channels,
            videos,
            analytics,
        })
    }

    /// Listed channels in display order.
    pub fn list_channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel(&self, id: ChannelId) -> Result<&Channel, MarketError> {
        self.channels
            .iter()
            .find(|c| c.id == id)
            .ok_or(MarketError::UnknownChannel(id))
    }

    pub fn videos(&self, id: ChannelId) -> Result<&ChannelVideos, MarketError> {
        self.videos.get(&id).ok_or(MarketError::UnknownChannel(id))
    }

    pub fn analytics(&self, id: ChannelId) -> Result<&ChannelAnalytics, MarketError> {
        self.analytics.get(&id).ok_or(MarketError::UnknownChannel(id))
    }
}

/// Integrity check over catalog inputs.
///
/// Verifies that the yearly subscriber baselines never reconstruct below
/// zero, that curated `30d`/`90d` months start at a non-negative subscriber
/// count with at least one day, that each video's revenue follows the per-mille rule, and that the
/// long/shorts flags agree with the video lists.
pub fn validate_entries(entries: &[CatalogEntry]) -> Result<(), MarketError> {
    for entry in entries {
        let id = entry.channel.id;
        reconstruct_baselines(entry.analytics.current_subscribers, &entry.analytics.yearly)?;

        let inconsistent = |reason: String| MarketError::InconsistentCatalog { channel: id, reason };

        if entry.channel.has_long_videos != !entry.videos.long.is_empty() {
            return Err(inconsistent("has_long_videos disagrees with long video list".to_string()));
        }
        if entry.channel.has_shorts != !entry.videos.shorts.is_empty() {
            return Err(inconsistent("has_shorts disagrees with shorts list".to_string()));
        }
        for video in entry.videos.long.iter().chain(&entry.videos.shorts) {
            if video.revenue != estimated_revenue(video.views) {
                return Err(inconsistent(format!("video {} revenue is {}", video.id, video.revenue)));
            }
        }
        for month in entry.analytics.last_30_days.iter().chain(&entry.analytics.last_90_days) {
            if month.days == 0 {
                return Err(MarketError::EmptyMonth(month.label.to_string()));
            }
            if month.subscriber_start < 0 {
                return Err(MarketError::NegativeBaseline {
                    month: month.label.to_string(),
                    start: month.subscriber_start,
                });
            }
        }
    }
    Ok(())
}

/// Run [`validate_entries`] over the compiled-in catalog.
pub fn validate_reference_data() -> Result<(), MarketError> {
    validate_entries(&reference_entries())
}

fn videos(rows: &[(&str, &str, u64, u64)], thumbnail: &str) -> Vec<Video> {
    rows.iter()
        .map(|&(id, title, views, likes)| Video::new(id, title, views, likes, thumbnail))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The two reference listings.
pub fn reference_entries() -> Vec<CatalogEntry> {
    vec![kai_guy(), football_time()]
}

fn kai_guy() -> CatalogEntry {
    let channel = Channel {
        id: 1,
        name: "Kai Guy".to_string(),
        category: "Gaming".to_string(),
        subscribers: 2_000_000,
        monthly_views: 5_375_341,
        monthly_revenue: 806,
        price: 3_500,
        banner_url: "https://placehold.co/1200x300/ff6347/ffffff?text=Kai+Guy".to_string(),
        logo_url: "https://placehold.co/100x100/ff4500/ffffff?text=KG".to_string(),
        channel_url: "https://www.youtube.com/@KaiGuyGD".to_string(),
        payment_link: "https://dashboard.skydo.com/pay/pyl_yPYYbl".to_string(),
        seller: Seller {
            id: "cb-7a9b1c0f-3d2e".to_string(),
            name: "Avery Callahan".to_string(),
            email: "averycallahan21@gmail.com".to_string(),
            avatar_url: "https://placehold.co/100x100/333333/ffffff?text=A".to_string(),
        },
        income_streams: strings(&["AdSense", "Sponsorships", "Affiliate Links"]),
        has_long_videos: true,
        has_shorts: true,
    };

    let long = videos(
        &[
            ("kg_long_1", "Guess what song PERFECTLY syncs with Skeletal Shenanigans...", 63_000, 2_400),
            ("kg_long_2", "\"iSpyWithMyLittleEye\" BUT I remade the song with my voice...", 810_000, 16_000),
            ("kg_long_3", "\"Skeletal Shenanigans\" BUT I remade the song with my voice...", 3_400_000, 58_000),
            ("kg_long_4", "\"Slaughterhouse\" BUT I remade the song with my voice...", 259_000, 4_500),
            ("kg_long_5", "\"Tidal Wave\" BUT I remade the song with my voice...", 82_000, 2_400),
            ("kg_long_6", "How To Get Better At Geometry Dash (Beginner ⇨ Top Player Guide)", 506_000, 15_000),
            ("kg_long_7", "10 Levels of Difficulty | Best Of Geometry Dash 2023", 578_000, 6_800),
            ("kg_long_8", "The WORST EVW Challenge EVER!", 118_000, 3_000),
            ("kg_long_9", "$1 vs $1000 Geometry Dash Level!", 320_000, 8_500),
            ("kg_long_10", "The Story of Geometry Dash's Greatest Player...", 200_000, 5_200),
            ("kg_long_11", "The ONLY Mod For Geometry Dash On iOS (2024)", 1_100_000, 22_000),
            ("kg_long_12", "the new top 1 is literally free", 106_000, 3_600),
            ("kg_long_13", "i beat slaughterhouse on mobile lol", 358_000, 5_800),
            ("kg_long_14", "21 Ways To Play Geometry Dash", 1_700_000, 20_000),
            ("kg_long_15", "\"10 Levels Of Difficulty\" | Creator Contest Winners!!", 184_000, 3_200),
            ("kg_long_16", "$1,000 Creator Contest Results!", 109_000, 2_400),
        ],
        LONG_THUMBNAIL,
    );

    let shorts = videos(
        &[
            ("kg_short_1", "Geometry Dash 2.2: Attractiveness Test 😭😭", 10_000_000, 421_000),
            ("kg_short_2", "Would You Rather In Geometry Dash 2.2 😳", 6_300_000, 102_000),
            ("kg_short_3", "Geometry Dash's Most Awkward Test😳😳😳", 3_900_000, 171_000),
            ("kg_short_4", "$1 vs $20,000,000 Choice In Geometry Dash!", 840_000, 30_000),
            ("kg_short_5", "$1 vs $1,000 Geometry Dash Level😱", 796_000, 31_000),
            ("kg_short_6", "Geometry Dash Pro Player Test! 😱", 330_000, 13_000),
            ("kg_short_7", "Geometry Dash 2.2: Worthy Or Not Test! 😳", 185_000, 5_600),
            ("kg_short_8", "10 Steps To Become A Geometry Dash Pro!", 2_500_000, 80_000),
            ("kg_short_9", "7 Steps To Make A Good Geometry Dash Level!", 897_000, 23_000),
            ("kg_short_10", "1 Minute vs 10 Years Playing Geometry Dash!", 2_800_000, 81_000),
            ("kg_short_11", "Attractiveness Test #2 | Geometry Dash 2.2", 1_800_000, 59_000),
            ("kg_short_12", "$500 Wonder Challenge In Geometry Dash!", 190_000, 5_100),
            ("kg_short_13", "Massage Gun Spam Hack In Geometry Dash!", 60_000_000, 1_700_000),
            ("kg_short_14", "EXTREME Spam Challenge In Geometry Dash!", 544_000, 14_000),
            ("kg_short_15", "🏆Level 1 To Level 10 In Geometry Dash!🏆", 415_000, 7_600),
            ("kg_short_16", "Geometry Dash Increasing Difficulty (Shh🤫)", 493_000, 11_000),
            ("kg_short_17", "I Failed This Geometry Dash Quiz 😭😭😭", 619_000, 9_400),
            ("kg_short_18", "Cheater vs Spam Trap for $10k 🐀", 201_000, 2_600),
            ("kg_short_19", "Hacker vs Spam Challenge 🎯", 139_000, 1_800),
            ("kg_short_20", "this has to be a joke 💀", 836_000, 19_000),
        ],
        SHORT_THUMBNAIL,
    );

    let analytics = AnalyticsSource {
        current_subscribers: 2_000_000,
        yearly: vec![
            MonthStat::new("Aug 24", 18_000, 3_100_000),
            MonthStat::new("Sep 24", 20_000, 3_520_405),
            MonthStat::new("Oct 24", 40_000, 2_965_876),
            MonthStat::new("Nov 24", 15_000, 1_082_983),
            MonthStat::new("Dec 24", 25_000, 2_084_960),
            MonthStat::new("Jan 25", 100_000, 1_553_483),
            MonthStat::new("Feb 25", 25_000, 867_140),
            MonthStat::new("Mar 25", 20_000, 1_491_142),
            MonthStat::new("Apr 25", 40_000, 2_142_874),
            MonthStat::new("May 25", 40_000, 1_834_790),
            MonthStat::new("Jun 25", 85_000, 6_063_982),
            MonthStat::new("Jul 25", 30_000, 5_375_341),
        ],
        last_30_days: vec![MonthSpec::new("Jul", 30, 1_970_000, 30_000, 5_375_341)],
        last_90_days: vec![
            MonthSpec::new("May", 31, 1_885_000, 40_000, 1_834_790),
            MonthSpec::new("Jun", 30, 1_925_000, 85_000, 6_063_982),
            MonthSpec::new("Jul", 30, 1_970_000, 30_000, 5_375_341),
        ],
    };

    CatalogEntry {
        channel,
        videos: ChannelVideos { long, shorts },
        analytics,
    }
}

fn football_time() -> CatalogEntry {
    let channel = Channel {
        id: 2,
        name: "Football Time".to_string(),
        category: "Sports".to_string(),
        subscribers: 782_000,
        monthly_views: 2_877_786,
        monthly_revenue: 432,
        price: 1_800,
        banner_url: "https://placehold.co/1200x300/228B22/ffffff?text=Football+Time".to_string(),
        logo_url: "https://placehold.co/100x100/32CD32/ffffff?text=FT".to_string(),
        channel_url: "https://www.youtube.com/@FootballTime_Live/featured".to_string(),
        payment_link: "https://dashboard.skydo.com/pay/pyl_NS3Ivr".to_string(),
        seller: Seller {
            id: "cb-4f8e2a9d-1b3c".to_string(),
            name: "Jordan Whitmore".to_string(),
            email: "Jwhitmore1988@gmail.com".to_string(),
            avatar_url: "https://placehold.co/100x100/333333/ffffff?text=J".to_string(),
        },
        income_streams: strings(&["AdSense", "YouTube Premium", "Fan Donations"]),
        has_long_videos: false,
        has_shorts: true,
    };

    let shorts = videos(
        &[
            ("ft_short_20", "Cheating in Football 👉PART 2", 1_100_000, 11_000),
            ("ft_short_19", "Penalty kick from another angle 😲 #5", 622_000, 5_400),
            ("ft_short_18", "When the defender puts on a show #3", 53_000, 435),
            ("ft_short_17", "Controversial Moments in Football 🤔 PART 6", 19_000, 176),
            ("ft_short_16", "When Players Celebrate Before Scoring", 287_000, 3_500),
            ("ft_short_15", "Defender level 0-100", 18_000, 174),
            ("ft_short_14", "Goalkeeper show or regular game 👉 PART 2", 88_000, 777),
            ("ft_short_13", "Crazy Referee Moments", 29_000, 312),
            ("ft_short_12", "When the goalkeeper puts on a show 👉 PART 16", 44_000, 426),
            ("ft_short_11", "Penalty kick from another angle 😲 #6", 24_000, 214),
            ("ft_short_10", "Goalkeeper show or regular game 👉 PART 3", 28_000, 345),
            ("ft_short_9", "Rare Penalty Moments", 38_000, 413),
            ("ft_short_8", "When the goalkeeper puts on a show 👉 PART 17", 188_000, 2_200),
            ("ft_short_7", "IQ 999 in Football 😑", 24_000, 369),
            ("ft_short_6", "Beyond VAR", 7_500, 79),
            ("ft_short_5", "When the goalkeeper puts on a show 👉 PART 18", 51_000, 674),
            ("ft_short_4", "When a player makes a show 😎", 27_000, 503),
            ("ft_short_3", "High IQ in Football 😬", 33_000, 421),
            ("ft_short_2", "When the goalkeeper puts on a show 👉 PART 19", 44_000, 724),
            ("ft_short_1", "1 in a Trillion Moments in Football 👉 PART 8", 26_000, 613),
        ],
        SHORT_THUMBNAIL,
    );

    let analytics = AnalyticsSource {
        current_subscribers: 782_000,
        yearly: vec![
            MonthStat::new("Aug 24", 5_000, 4_800_000),
            MonthStat::new("Sep 24", 7_000, 5_300_000),
            MonthStat::new("Oct 24", 11_000, 7_100_000),
            MonthStat::new("Nov 24", 8_000, 6_200_000),
            MonthStat::new("Dec 24", 10_000, 4_500_000),
            MonthStat::new("Jan 25", 1_000, 5_872_374),
            MonthStat::new("Feb 25", 2_000, 2_846_832),
            MonthStat::new("Mar 25", 3_000, 10_221_474),
            MonthStat::new("Apr 25", 5_000, 32_972_125),
            MonthStat::new("May 25", 7_000, 31_920_559),
            MonthStat::new("Jun 25", 5_000, 24_295_842),
            MonthStat::new("Jul 25", 5_000, 2_877_786),
        ],
        last_30_days: vec![MonthSpec::new("Jul", 30, 777_000, 5_000, 2_877_786)],
        last_90_days: vec![
            MonthSpec::new("May", 31, 770_000, 7_000, 31_920_559),
            MonthSpec::new("Jun", 30, 777_000, 5_000, 24_295_842),
            MonthSpec::new("Jul", 30, 782_000, 5_000, 2_877_786),
        ],
    };

    CatalogEntry {
        channel,
        videos: ChannelVideos {
            long: Vec::new(),
            shorts,
        },
        analytics,
    }
}
