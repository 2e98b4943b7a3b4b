use anyhow::Context;
use chrono::Duration;
use rand::{seq::SliceRandom, Rng};
use rumors_api::{
    Feedback, Reply, ReplyConnection, ReplyConnectionId, ReplyId, ReplyType, ReplyVersion, User,
};

const NUM_USERS: usize = 5;
const NUM_CONNECTIONS: usize = 20;
const MAX_VERSIONS: usize = 3;
const MAX_FEEDBACKS: usize = 12;
const TEXT_WORD_COUNT: usize = 40;
const MAX_AGE_DAYS: i64 = 800;

static TYPES: [ReplyType; 4] = [
    ReplyType::Rumor,
    ReplyType::NotRumor,
    ReplyType::Opinionated,
    ReplyType::NotArticle,
];

fn gen_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn gen_text(rng: &mut impl Rng) -> String {
    // split in a few paragraphs, with the occasional link
    (0..rng.gen_range(1..=3))
        .map(|_| {
            let mut p = lipsum::lipsum_words(rng.gen_range(1..=TEXT_WORD_COUNT));
            if rng.gen_bool(0.3) {
                p.push_str(&format!(" https://example.com/{}", gen_id()));
            }
            p
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn gen_version(rng: &mut impl Rng, users: &[User]) -> ReplyVersion {
    ReplyVersion {
        typ: TYPES.choose(rng).expect("no reply type").clone(),
        text: gen_text(rng),
        reference: rng.gen_bool(0.7).then(|| gen_text(rng)),
        user: rng
            .gen_bool(0.9)
            .then(|| users.choose(rng).cloned())
            .flatten(),
    }
}

fn main() -> anyhow::Result<()> {
    let count = match std::env::args().nth(1) {
        Some(n) => n.parse::<usize>().context("parsing number of reply connections")?,
        None => NUM_CONNECTIONS,
    };
    let mut rng = rand::thread_rng();

    let users = (0..NUM_USERS)
        .map(|_| User::new(&gen_id(), &lipsum::lipsum_words(1)))
        .collect::<Vec<_>>();

    let now = chrono::Utc::now();
    let mut connections = Vec::with_capacity(count);
    for _ in 0..count {
        let versions = (0..rng.gen_range(1..=MAX_VERSIONS))
            .map(|_| gen_version(&mut rng, &users))
            .collect();
        connections.push(ReplyConnection {
            id: ReplyConnectionId(gen_id()),
            created_at: now - Duration::minutes(rng.gen_range(0..MAX_AGE_DAYS * 24 * 60)),
            user: rng
                .gen_bool(0.8)
                .then(|| users.choose(&mut rng).cloned())
                .flatten(),
            can_update_status: rng.gen_bool(0.3),
            feedbacks: (0..rng.gen_range(0..=MAX_FEEDBACKS))
                .map(|_| Feedback {
                    score: rng.gen_range(-1..=1),
                })
                .collect(),
            reply: Reply::new(ReplyId(gen_id()), versions)?,
        });
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&connections).context("serializing reply connections")?
    );
    Ok(())
}
