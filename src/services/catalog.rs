//! Anime pairing catalog.
//!
//! Categories are listed in tie-break order: when two categories score the
//! same for a bottle, the one defined first here ranks first. Entry titles
//! must be unique across the whole catalog because selection deduplicates by
//! title.

use crate::models::recommendation::Pairing;
use crate::models::whiskey::WhiskeyRecord;
use crate::services::scoring;

/// Affinity rule for one category.
pub type ScoreFn = fn(&WhiskeyRecord) -> u32;

/// One anime that can be recommended.
#[derive(Debug)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub genre: &'static [&'static str],
    pub reasoning: &'static str,
    pub streaming: &'static [&'static str],
    pub mal_score: f64,
}

/// A scoring rule together with the anime it unlocks.
#[derive(Debug)]
pub struct Category {
    pub label: &'static str,
    pub score: ScoreFn,
    pub entries: &'static [CatalogEntry],
}

impl Category {
    /// Label as shown to users, e.g. "peated smoky".
    pub fn display_label(&self) -> String {
        self.label.replace('_', " ")
    }
}

/// Total number of entries across every category.
pub fn entry_count() -> usize {
    CATALOG.iter().map(|category| category.entries.len()).sum()
}

pub const CATALOG: &[Category] = &[
    // ── Smooth & Approachable ────────────────────────────────────────
    Category {
        label: "smooth_approachable",
        score: scoring::smooth_approachable,
        entries: &[
            CatalogEntry {
                title: "One Piece",
                genre: &["Adventure", "Shounen"],
                reasoning: "Like a crowd-pleasing bourbon, this epic adventure is accessible, fun, and beloved worldwide. Starts smooth and builds in complexity over time.",
                streaming: &["Crunchyroll", "Netflix"],
                mal_score: 8.7,
            },
            CatalogEntry {
                title: "Spy x Family",
                genre: &["Comedy", "Action"],
                reasoning: "Smooth, charming, and universally enjoyable, like a well-made wheated bourbon. Easy to get into with surprising depth.",
                streaming: &["Crunchyroll", "Hulu"],
                mal_score: 8.6,
            },
            CatalogEntry {
                title: "My Hero Academia",
                genre: &["Action", "Shounen"],
                reasoning: "Approachable and crowd-pleasing with smooth character development. Great for both beginners and enthusiasts alike.",
                streaming: &["Crunchyroll", "Hulu"],
                mal_score: 8.0,
            },
            CatalogEntry {
                title: "Naruto",
                genre: &["Action", "Shounen"],
                reasoning: "Classic gateway anime like Buffalo Trace is a gateway bourbon: approachable, well-crafted, and universally enjoyed.",
                streaming: &["Crunchyroll", "Netflix"],
                mal_score: 8.3,
            },
            CatalogEntry {
                title: "Kaguya-sama: Love is War",
                genre: &["Comedy", "Romance"],
                reasoning: "Sharp wit with sweet moments, like a balanced bourbon with both spice and caramel notes.",
                streaming: &["Crunchyroll"],
                mal_score: 8.7,
            },
        ],
    },
    // ── Complex & Intense ────────────────────────────────────────────
    Category {
        label: "complex_intense",
        score: scoring::complex_intense,
        entries: &[
            CatalogEntry {
                title: "Steins;Gate",
                genre: &["Sci-Fi", "Thriller"],
                reasoning: "Like a barrel-proof single barrel, this demands your full attention. Complex, layered, and intensely rewarding.",
                streaming: &["Crunchyroll", "Hulu"],
                mal_score: 9.1,
            },
            CatalogEntry {
                title: "Death Note",
                genre: &["Psychological", "Thriller"],
                reasoning: "High-proof intensity that demands your attention. Every episode hits hard with complex mind games.",
                streaming: &["Netflix", "Crunchyroll"],
                mal_score: 8.6,
            },
            CatalogEntry {
                title: "Code Geass",
                genre: &["Mecha", "Drama"],
                reasoning: "Barrel-proof complexity with layers of political intrigue. Not for casual watching, it rewards commitment.",
                streaming: &["Crunchyroll", "Netflix"],
                mal_score: 8.7,
            },
            CatalogEntry {
                title: "Monster",
                genre: &["Psychological", "Thriller"],
                reasoning: "Deep, dark, and complex, like a cask-strength pour. Not for casual sipping, but unforgettable for those who commit.",
                streaming: &["Netflix"],
                mal_score: 8.7,
            },
            CatalogEntry {
                title: "Fate/Zero",
                genre: &["Action", "Fantasy"],
                reasoning: "Dense, complex narrative that rewards careful attention, like sipping a high-proof bourbon slowly and savoring every note.",
                streaming: &["Crunchyroll", "Netflix"],
                mal_score: 8.3,
            },
        ],
    },
    // ── Classic & Traditional ────────────────────────────────────────
    Category {
        label: "classic_traditional",
        score: scoring::classic_traditional,
        entries: &[
            CatalogEntry {
                title: "Cowboy Bebop",
                genre: &["Action", "Sci-Fi"],
                reasoning: "A timeless classic. Sophisticated, well-crafted, and gets better every time you revisit it. The bourbon of anime.",
                streaming: &["Crunchyroll", "Netflix"],
                mal_score: 8.8,
            },
            CatalogEntry {
                title: "Samurai Champloo",
                genre: &["Action", "Historical"],
                reasoning: "Traditional craftsmanship with a modern twist, like an aged bourbon with a unique finish. Smooth but substantial.",
                streaming: &["Crunchyroll"],
                mal_score: 8.5,
            },
            CatalogEntry {
                title: "Trigun",
                genre: &["Action", "Sci-Fi"],
                reasoning: "Classic craftsmanship with depth, like a well-aged bourbon that reveals more with each sip.",
                streaming: &["Crunchyroll"],
                mal_score: 8.2,
            },
            CatalogEntry {
                title: "Ghost in the Shell: SAC",
                genre: &["Sci-Fi", "Cyberpunk"],
                reasoning: "Sophisticated, thought-provoking, and enduring. A true classic that stands the test of time.",
                streaming: &["Crunchyroll"],
                mal_score: 8.4,
            },
            CatalogEntry {
                title: "Rurouni Kenshin",
                genre: &["Action", "Historical"],
                reasoning: "Traditional excellence with modern appeal, aged to perfection. A classic blend of action and heart.",
                streaming: &["Crunchyroll"],
                mal_score: 8.3,
            },
        ],
    },
    // ── Budget / Value ───────────────────────────────────────────────
    Category {
        label: "budget_value",
        score: scoring::budget_value,
        entries: &[
            CatalogEntry {
                title: "Hunter x Hunter",
                genre: &["Adventure", "Shounen"],
                reasoning: "Incredible quality that exceeds expectations. Better value than bottles twice the price, a hidden gem for those in the know.",
                streaming: &["Crunchyroll", "Netflix"],
                mal_score: 9.1,
            },
            CatalogEntry {
                title: "Demon Slayer",
                genre: &["Action", "Shounen"],
                reasoning: "Incredible quality for the price. Accessible, beautiful, and packs a punch without breaking the bank.",
                streaming: &["Crunchyroll", "Netflix"],
                mal_score: 8.5,
            },
            CatalogEntry {
                title: "Jujutsu Kaisen",
                genre: &["Action", "Shounen"],
                reasoning: "Modern excellence at an accessible price point. Quality per dollar is unmatched and it punches way above its weight.",
                streaming: &["Crunchyroll"],
                mal_score: 8.7,
            },
            CatalogEntry {
                title: "Mob Psycho 100",
                genre: &["Action", "Comedy"],
                reasoning: "Phenomenal quality without the premium price tag. Punches above its weight class with style and substance.",
                streaming: &["Crunchyroll"],
                mal_score: 8.6,
            },
            CatalogEntry {
                title: "Haikyuu!!",
                genre: &["Sports", "Shounen"],
                reasoning: "Pure enjoyment without pretension. Like a solid daily sipper: consistently satisfying and never disappoints.",
                streaming: &["Crunchyroll", "Netflix"],
                mal_score: 8.5,
            },
        ],
    },
    // ── Wheated & Sweet ──────────────────────────────────────────────
    Category {
        label: "wheated_sweet",
        score: scoring::wheated_sweet,
        entries: &[
            CatalogEntry {
                title: "Violet Evergarden",
                genre: &["Drama", "Slice of Life"],
                reasoning: "Wheated bourbons are sweet and smooth, just like this beautifully crafted, emotionally rich story.",
                streaming: &["Netflix"],
                mal_score: 8.6,
            },
            CatalogEntry {
                title: "Your Name",
                genre: &["Romance", "Fantasy"],
                reasoning: "Sweet, smooth, and emotionally impactful. Like a perfectly balanced wheated bourbon, accessible but deeply moving.",
                streaming: &["Crunchyroll"],
                mal_score: 8.9,
            },
            CatalogEntry {
                title: "Fruits Basket",
                genre: &["Romance", "Drama"],
                reasoning: "Sweet and heartwarming like a wheated bourbon. Emotional depth with smooth, accessible storytelling.",
                streaming: &["Crunchyroll"],
                mal_score: 8.6,
            },
            CatalogEntry {
                title: "Your Lie in April",
                genre: &["Music", "Romance"],
                reasoning: "Sweet with emotional depth. Smooth storytelling that moves the heart, like the best wheated pours.",
                streaming: &["Crunchyroll", "Netflix"],
                mal_score: 8.7,
            },
            CatalogEntry {
                title: "A Place Further Than the Universe",
                genre: &["Adventure", "Slice of Life"],
                reasoning: "Heartwarming journey with sweet character moments and smooth pacing. Pure warmth in every episode.",
                streaming: &["Crunchyroll"],
                mal_score: 8.6,
            },
        ],
    },
    // ── High-Rye & Spicy ─────────────────────────────────────────────
    Category {
        label: "high_rye_spicy",
        score: scoring::high_rye_spicy,
        entries: &[
            CatalogEntry {
                title: "Attack on Titan",
                genre: &["Action", "Dark Fantasy"],
                reasoning: "High-rye bourbons have a spicy kick, just like this intense, aggressive, and uncompromising series.",
                streaming: &["Crunchyroll", "Hulu"],
                mal_score: 9.0,
            },
            CatalogEntry {
                title: "Vinland Saga",
                genre: &["Action", "Historical"],
                reasoning: "Spicy, intense, and complex. Like a high-rye mash bill: bold flavors that evolve dramatically.",
                streaming: &["Netflix", "Crunchyroll"],
                mal_score: 8.7,
            },
            CatalogEntry {
                title: "Dororo",
                genre: &["Action", "Historical"],
                reasoning: "Sharp, intense, and gripping, like the rye spice that cuts through and demands attention.",
                streaming: &["Amazon", "Crunchyroll"],
                mal_score: 8.2,
            },
            CatalogEntry {
                title: "Black Lagoon",
                genre: &["Action", "Crime"],
                reasoning: "Unapologetically intense and spicy throughout. No smoothing agents here, just pure, bold action.",
                streaming: &["Crunchyroll", "Hulu"],
                mal_score: 8.1,
            },
        ],
    },
    // ── Premium & Allocated ──────────────────────────────────────────
    Category {
        label: "premium_allocated",
        score: scoring::premium_allocated,
        entries: &[
            CatalogEntry {
                title: "Fullmetal Alchemist: Brotherhood",
                genre: &["Action", "Fantasy"],
                reasoning: "The Pappy Van Winkle of anime: universally acclaimed, hard to find time to rewatch, and worth every bit of the hype.",
                streaming: &["Crunchyroll", "Netflix"],
                mal_score: 9.2,
            },
            CatalogEntry {
                title: "Legend of the Galactic Heroes",
                genre: &["Sci-Fi", "Drama"],
                reasoning: "Epic, sophisticated, and for true connoisseurs. Like a rare allocated pour, it demands patience and rewards dedication.",
                streaming: &["Crunchyroll"],
                mal_score: 9.0,
            },
            CatalogEntry {
                title: "Ping Pong the Animation",
                genre: &["Sports", "Drama"],
                reasoning: "Understated excellence that's hard to find but absolutely worth it. A connoisseur's pick.",
                streaming: &["Crunchyroll"],
                mal_score: 8.6,
            },
        ],
    },
    // ── Single Barrel & Unique ───────────────────────────────────────
    Category {
        label: "single_barrel_unique",
        score: scoring::single_barrel_unique,
        entries: &[
            CatalogEntry {
                title: "Odd Taxi",
                genre: &["Mystery", "Thriller"],
                reasoning: "Like a single barrel pick: unique, unexpected, and shows what happens when you take creative risks.",
                streaming: &["Crunchyroll"],
                mal_score: 8.8,
            },
            CatalogEntry {
                title: "Tatami Galaxy",
                genre: &["Comedy", "Psychological"],
                reasoning: "Experimental storytelling that rewards the adventurous, like a funky barrel pick that's unlike anything else.",
                streaming: &["Crunchyroll"],
                mal_score: 8.6,
            },
            CatalogEntry {
                title: "FLCL",
                genre: &["Sci-Fi", "Comedy"],
                reasoning: "Wild, unique, and completely different from anything else. A single barrel that defies all conventions.",
                streaming: &["Crunchyroll", "Hulu"],
                mal_score: 8.0,
            },
            CatalogEntry {
                title: "Sonny Boy",
                genre: &["Mystery", "Supernatural"],
                reasoning: "Polarizing and artistic. Like a barrel-proof single barrel, some find it brilliant and others don't get it.",
                streaming: &["Crunchyroll"],
                mal_score: 7.5,
            },
        ],
    },
    // ── Japanese & Refined ───────────────────────────────────────────
    Category {
        label: "japanese_refined",
        score: scoring::japanese_refined,
        entries: &[
            CatalogEntry {
                title: "Mushishi",
                genre: &["Fantasy", "Slice of Life"],
                reasoning: "Japanese whisky is all about balance and subtlety, just like this meditative, beautifully atmospheric series.",
                streaming: &["Crunchyroll"],
                mal_score: 8.7,
            },
            CatalogEntry {
                title: "March Comes in Like a Lion",
                genre: &["Drama", "Slice of Life"],
                reasoning: "Refined, introspective, and deeply Japanese in sensibility. Like Yamazaki, every element is deliberate.",
                streaming: &["Crunchyroll", "Netflix"],
                mal_score: 8.8,
            },
            CatalogEntry {
                title: "Aria the Animation",
                genre: &["Slice of Life", "Fantasy"],
                reasoning: "Calm, luminous, and unhurried. Like a Japanese blend where every component is balanced so nothing shouts.",
                streaming: &["Crunchyroll"],
                mal_score: 7.9,
            },
            CatalogEntry {
                title: "Barakamon",
                genre: &["Slice of Life", "Comedy"],
                reasoning: "Quiet excellence with subtle depth. Like a fine Japanese whisky: unassuming, warm, and deeply satisfying.",
                streaming: &["Crunchyroll"],
                mal_score: 8.3,
            },
        ],
    },
    // ── Peated & Smoky ───────────────────────────────────────────────
    Category {
        label: "peated_smoky",
        score: scoring::peated_smoky,
        entries: &[
            CatalogEntry {
                title: "Berserk (1997)",
                genre: &["Action", "Dark Fantasy"],
                reasoning: "Dark, intense, and not for the faint of heart, just like an Islay scotch. The smoke and struggle leave a lasting impression.",
                streaming: &["Crunchyroll"],
                mal_score: 8.7,
            },
            CatalogEntry {
                title: "Made in Abyss",
                genre: &["Adventure", "Fantasy"],
                reasoning: "Beautiful on the surface with dark, smoky depths beneath. Like peated scotch, the deeper you go the more intense it gets.",
                streaming: &["Amazon", "Netflix"],
                mal_score: 8.7,
            },
            CatalogEntry {
                title: "Psycho-Pass",
                genre: &["Sci-Fi", "Thriller"],
                reasoning: "Dark, complex, and thought-provoking. The noir atmosphere mirrors the smoky depths of a good peat bomb.",
                streaming: &["Crunchyroll", "Hulu"],
                mal_score: 8.4,
            },
            CatalogEntry {
                title: "Paranoia Agent",
                genre: &["Psychological", "Mystery"],
                reasoning: "Unsettling and complex like a challenging Islay dram. Not for everyone, but those who get it really get it.",
                streaming: &["Crunchyroll"],
                mal_score: 7.7,
            },
        ],
    },
    // ── Irish & Easy ─────────────────────────────────────────────────
    Category {
        label: "irish_easy",
        score: scoring::irish_easy,
        entries: &[
            CatalogEntry {
                title: "Frieren: Beyond Journey's End",
                genre: &["Fantasy", "Adventure"],
                reasoning: "Irish whiskey is warm, inviting, and deceptively deep, just like this show that wraps profound themes in gentle storytelling.",
                streaming: &["Crunchyroll"],
                mal_score: 9.1,
            },
            CatalogEntry {
                title: "Ranking of Kings",
                genre: &["Fantasy", "Adventure"],
                reasoning: "Charming and easy to love with a warm heart. Like a triple-distilled Irish pour: smooth entry, surprising complexity.",
                streaming: &["Crunchyroll"],
                mal_score: 8.6,
            },
            CatalogEntry {
                title: "Horimiya",
                genre: &["Romance", "Slice of Life"],
                reasoning: "Smooth, sweet, and satisfying. Like a good Irish whiskey, no pretension, just genuine warmth and charm.",
                streaming: &["Crunchyroll"],
                mal_score: 8.2,
            },
        ],
    },
    // ── Cozy & Dessert (cream / liqueurs) ────────────────────────────
    Category {
        label: "cozy_dessert",
        score: scoring::cozy_dessert,
        entries: &[
            CatalogEntry {
                title: "Laid-Back Camp",
                genre: &["Slice of Life", "Comedy"],
                reasoning: "Cozy, smooth, and sweet. Perfect for relaxed evenings, like a bourbon cream on the rocks.",
                streaming: &["Crunchyroll"],
                mal_score: 8.3,
            },
            CatalogEntry {
                title: "Nichijou",
                genre: &["Comedy", "Slice of Life"],
                reasoning: "Sweet, silly, and endlessly entertaining. Pure comfort viewing that goes down easy.",
                streaming: &["Crunchyroll"],
                mal_score: 8.5,
            },
            CatalogEntry {
                title: "K-On!",
                genre: &["Music", "Slice of Life"],
                reasoning: "Smooth, sweet, and feel-good from start to finish. The anime equivalent of a cozy nightcap.",
                streaming: &["Crunchyroll"],
                mal_score: 7.9,
            },
        ],
    },
    // ── Adventure Seekers (high-proof exploration) ───────────────────
    Category {
        label: "adventure_seeker",
        score: scoring::adventure_seeker,
        entries: &[
            CatalogEntry {
                title: "Delicious in Dungeon",
                genre: &["Adventure", "Fantasy"],
                reasoning: "An expedition that savors every strange ingredient on the way down, like chasing new bottles just to see what is out there.",
                streaming: &["Netflix"],
                mal_score: 8.6,
            },
            CatalogEntry {
                title: "Kino's Journey",
                genre: &["Adventure", "Slice of Life"],
                reasoning: "Every stop is a new country with its own rules. Not what you expect, like an adventurous barrel finish.",
                streaming: &["Crunchyroll"],
                mal_score: 8.3,
            },
            CatalogEntry {
                title: "The Promised Neverland",
                genre: &["Mystery", "Thriller"],
                reasoning: "Twists and turns that keep you on edge. Every sip reveals something new, like an adventurous single barrel.",
                streaming: &["Crunchyroll", "Netflix"],
                mal_score: 8.6,
            },
        ],
    },
    // ── Comedy / Social Drinkers ─────────────────────────────────────
    Category {
        label: "comedy_social",
        score: scoring::comedy_social,
        entries: &[
            CatalogEntry {
                title: "Konosuba",
                genre: &["Comedy", "Fantasy"],
                reasoning: "Fun, unpretentious, and hilarious, like drinking bourbon with friends on a Friday night. No snobbery, just good times.",
                streaming: &["Crunchyroll"],
                mal_score: 8.1,
            },
            CatalogEntry {
                title: "Grand Blue",
                genre: &["Comedy", "Slice of Life"],
                reasoning: "Literally about drinking (and diving). The perfect match for bourbon enthusiasts who love a good time.",
                streaming: &["Amazon", "Crunchyroll"],
                mal_score: 8.4,
            },
            CatalogEntry {
                title: "Gintama",
                genre: &["Comedy", "Action"],
                reasoning: "Long-running fun that never takes itself too seriously. Like that go-to bourbon you always keep on the shelf.",
                streaming: &["Crunchyroll"],
                mal_score: 8.9,
            },
        ],
    },
    // ── Dark & Noir ──────────────────────────────────────────────────
    Category {
        label: "dark_noir",
        score: scoring::dark_noir,
        entries: &[
            CatalogEntry {
                title: "Ergo Proxy",
                genre: &["Sci-Fi", "Mystery"],
                reasoning: "Brooding cyberpunk noir with layers of philosophy, like a deep, oaky dram that lingers on the palate.",
                streaming: &["Crunchyroll"],
                mal_score: 7.9,
            },
            CatalogEntry {
                title: "Erased",
                genre: &["Mystery", "Thriller"],
                reasoning: "Gripping mystery with emotional depth. Dark notes with a surprisingly warm finish.",
                streaming: &["Crunchyroll", "Netflix"],
                mal_score: 8.3,
            },
            CatalogEntry {
                title: "Terror in Resonance",
                genre: &["Thriller", "Drama"],
                reasoning: "Atmospheric and brooding. Like a late-night pour of something dark and contemplative.",
                streaming: &["Crunchyroll"],
                mal_score: 7.9,
            },
        ],
    },
    // ── Romance & Refined Palates ────────────────────────────────────
    Category {
        label: "romance_refined",
        score: scoring::romance_refined,
        entries: &[
            CatalogEntry {
                title: "Toradora!",
                genre: &["Romance", "Comedy"],
                reasoning: "Sweet with surprising depth and complexity. Like a well-balanced pour with floral notes.",
                streaming: &["Crunchyroll"],
                mal_score: 8.2,
            },
            CatalogEntry {
                title: "Kimi ni Todoke",
                genre: &["Romance", "Slice of Life"],
                reasoning: "Gentle, sincere, and quietly sweet. Soft floral notes with a warm, lingering finish.",
                streaming: &["Netflix"],
                mal_score: 8.0,
            },
            CatalogEntry {
                title: "A Silent Voice",
                genre: &["Drama", "Romance"],
                reasoning: "Delicate and emotionally layered, like a perfectly poured glass of something special.",
                streaming: &["Netflix"],
                mal_score: 8.9,
            },
        ],
    },
    // ── Sports & Competition ─────────────────────────────────────────
    Category {
        label: "sports_competition",
        score: scoring::sports_competition,
        entries: &[
            CatalogEntry {
                title: "Kuroko's Basketball",
                genre: &["Sports", "Shounen"],
                reasoning: "Pure excellence in execution. No pretense, just quality, like a straightforward, well-crafted bourbon.",
                streaming: &["Crunchyroll"],
                mal_score: 8.1,
            },
            CatalogEntry {
                title: "Hajime no Ippo",
                genre: &["Sports", "Action"],
                reasoning: "Underdog story with heart and determination. Like discovering an underrated bottle that punches above its weight.",
                streaming: &["Crunchyroll"],
                mal_score: 8.7,
            },
            CatalogEntry {
                title: "Yowamushi Pedal",
                genre: &["Sports", "Comedy"],
                reasoning: "An unlikely rider with real grit. Like finding a gem on the bottom shelf, pure craftsmanship.",
                streaming: &["Crunchyroll"],
                mal_score: 8.0,
            },
        ],
    },
];

pub const POPULAR_PAIRINGS: &[Pairing] = &[
    Pairing {
        bourbon: "Buffalo Trace",
        anime: "One Piece",
        reasoning: "Both are approachable classics that get better the more you explore",
    },
    Pairing {
        bourbon: "Maker's Mark",
        anime: "Spy x Family",
        reasoning: "Smooth, charming, and universally enjoyable",
    },
    Pairing {
        bourbon: "Booker's",
        anime: "Attack on Titan",
        reasoning: "High-proof intensity matches the aggressive storytelling",
    },
    Pairing {
        bourbon: "Pappy Van Winkle",
        anime: "FMA: Brotherhood",
        reasoning: "Rare, acclaimed, and absolutely worth the hype",
    },
    Pairing {
        bourbon: "Yamazaki 12",
        anime: "Mushishi",
        reasoning: "Japanese refinement: balanced, subtle, meditative",
    },
    Pairing {
        bourbon: "Laphroaig 10",
        anime: "Berserk",
        reasoning: "Dark, smoky, intense, not for the faint of heart",
    },
    Pairing {
        bourbon: "Wild Turkey 101",
        anime: "Konosuba",
        reasoning: "Fun, honest, and perfect for sharing with friends",
    },
    Pairing {
        bourbon: "Evan Williams",
        anime: "Demon Slayer",
        reasoning: "Incredible quality that punches way above its price",
    },
];
