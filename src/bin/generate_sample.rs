use anyhow::{Context, Result};

const OUTPUT_PATH: &str = "Technical Support.csv";
const ROWS: usize = 240;

const HEADER: [&str; 13] = [
    "First Name",
    "Last Name",
    "City",
    "Last Company",
    "Total IT Experience",
    "Troubleshooting Experience",
    "Microsoft Windows (desktop & server, including Active Directory)",
    "Network management",
    "Microsoft 365",
    "Actively Looking",
    "Gaming/Films Experience",
    "Level",
    "Title",
];

const FIRST_NAMES: [&str; 12] = [
    "Ana", "José", "Bo", "Chloé", "Darius", "Eun-ji", "François", "Grace", "Héctor", "Imani",
    "Jonas", "Zoë",
];
const LAST_NAMES: [&str; 10] = [
    "Lopez", "Peña", "Chen", "Müller", "Okafor", "Nguyen", "O'Brien", "Sørensen", "Patel", "Smith",
];
const CITIES: [&str; 6] = ["Austin", "Dallas", "Houston", "San Antonio", "El Paso", "Montréal"];
const COMPANIES: [&str; 7] = [
    "Dell", "Rackspace", "Indeed", "USAA", "Electronic Arts", "Blizzard", "Frontier",
];
const LEVELS: [(&str, &str); 3] = [
    ("Tier 1", "Help Desk Technician"),
    ("Tier 2", "Technical Support Representative"),
    ("Tier 3", "Senior Support Engineer"),
];
const YES_SPELLINGS: [&str; 4] = ["Yes", "y", "TRUE", "1"];
const NO_SPELLINGS: [&str; 4] = ["No", "n", "", "unsure"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Numeric cell, occasionally blank or garbled like hand-entered data.
fn messy_number(rng: &mut SimpleRng, value: f64) -> String {
    if rng.chance(0.04) {
        String::new()
    } else if rng.chance(0.02) {
        "n/a".to_string()
    } else {
        format!("{value:.0}")
    }
}

/// Encode as ISO-8859-1; characters outside it become '?'.
fn to_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for _ in 0..ROWS {
        let tier = (rng.next_u64() % LEVELS.len() as u64) as usize;
        let (level, title) = LEVELS[tier];

        // Higher tiers skew towards more experience.
        let total_it = (rng.next_f64() * 10.0 + tier as f64 * 8.0).round();
        let troubleshooting = (total_it * (0.4 + rng.next_f64() * 0.5)).round();
        let skill = |rng: &mut SimpleRng| (rng.next_f64() * 6.0 + tier as f64 * 2.0).min(10.0);

        let first = rng.pick(&FIRST_NAMES);
        // Some hand-typed names carry stray whitespace.
        let first = if rng.chance(0.1) {
            format!(" {first}  ")
        } else {
            first.to_string()
        };

        let company = rng.pick(&COMPANIES);
        let gaming = company == "Electronic Arts" || company == "Blizzard" || rng.chance(0.15);
        let looking = rng.chance(0.55);

        let windows = skill(&mut rng);
        let network = skill(&mut rng);
        let m365 = skill(&mut rng);

        let record = [
            first,
            rng.pick(&LAST_NAMES).to_string(),
            rng.pick(&CITIES).to_string(),
            company.to_string(),
            messy_number(&mut rng, total_it),
            messy_number(&mut rng, troubleshooting),
            messy_number(&mut rng, windows),
            messy_number(&mut rng, network),
            messy_number(&mut rng, m365),
            rng.pick(if looking { &YES_SPELLINGS } else { &NO_SPELLINGS }).to_string(),
            rng.pick(if gaming { &YES_SPELLINGS } else { &NO_SPELLINGS }).to_string(),
            level.to_string(),
            title.to_string(),
        ];
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV writer: {}", e.error()))?;
    let text = String::from_utf8(bytes).context("CSV writer produced invalid UTF-8")?;
    std::fs::write(OUTPUT_PATH, to_latin1(&text))
        .with_context(|| format!("writing {OUTPUT_PATH}"))?;

    println!("Wrote {ROWS} candidates to {OUTPUT_PATH}");
    Ok(())
}
