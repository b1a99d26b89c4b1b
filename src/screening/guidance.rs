//! Fixed advisory content keyed by `(domain, priority)`.
//!
//! Text may carry an `{age}` placeholder that is filled with the child's age
//! in years. Where wording changes with age, an entry with a higher
//! `min_age` overrides the general one.

use super::domain::{DevelopmentDomain, Priority, Recommendation};

const ANY_AGE: i32 = i32::MIN;

pub(crate) struct Guidance {
    domain: DevelopmentDomain,
    priority: Priority,
    min_age: i32,
    title: &'static str,
    description: &'static str,
    what_this_means: &'static str,
    next_steps: &'static str,
    activities: &'static [&'static str],
}

impl Guidance {
    pub(crate) fn render(&self, child_age: i32) -> Recommendation {
        let fill = |template: &str| template.replace("{age}", &child_age.to_string());

        Recommendation {
            priority: self.priority,
            title: fill(self.title),
            description: fill(self.description),
            what_this_means: Some(fill(self.what_this_means)),
            next_steps: Some(fill(self.next_steps)),
            activities: self.activities.iter().map(|activity| fill(*activity)).collect(),
            domain: Some(self.domain),
        }
    }
}

/// Most specific entry for the pair whose `min_age` the child has reached.
pub(crate) fn lookup(
    domain: DevelopmentDomain,
    priority: Priority,
    child_age: i32,
) -> Option<&'static Guidance> {
    DOMAIN_GUIDANCE
        .iter()
        .filter(|entry| {
            entry.domain == domain && entry.priority == priority && child_age >= entry.min_age
        })
        .max_by_key(|entry| entry.min_age)
}

static DOMAIN_GUIDANCE: [Guidance; 9] = [
    Guidance {
        domain: DevelopmentDomain::SpeechLanguage,
        priority: Priority::Urgent,
        min_age: ANY_AGE,
        title: "Speech Therapy Recommended",
        description: "Your child's speech development is significantly below expected milestones for age {age}. Early intervention is crucial - children who receive speech therapy before age 5 show 70% better outcomes.",
        what_this_means: "Your child may struggle to express needs, form friendships, or succeed in school without support.",
        next_steps: "Book a professional speech assessment with Talktu within 2 weeks. We offer affordable pediatric speech therapy (₦5,000-15,000/session).",
        activities: &[
            "✓ Daily 15-min conversation practice (builds vocabulary by 30%)",
            "✓ Picture book discussions (improves sentence structure)",
            "✓ Simple question-answer games (enhances comprehension)",
            "✓ Singing songs and rhymes (strengthens pronunciation)",
        ],
    },
    Guidance {
        domain: DevelopmentDomain::SpeechLanguage,
        priority: Priority::NeedsSupport,
        min_age: ANY_AGE,
        title: "Speech Practice Recommended",
        description: "Your child's language skills are developing but need focused attention. With consistent practice (3-4 sessions weekly), most children catch up within 3-6 months.",
        what_this_means: "Your child can communicate but may have limited vocabulary or unclear speech, affecting confidence.",
        next_steps: "Try Talktu's guided speech exercises (free for first month) or book a consultation (₦3,000).",
        activities: &[
            "✓ Name and describe objects during play (expands vocabulary)",
            "✓ Practice 2-step instructions daily (improves listening)",
            "✓ Expand on their sentences (models proper grammar)",
            "✓ Read interactive books together (builds comprehension)",
        ],
    },
    Guidance {
        domain: DevelopmentDomain::Literacy,
        priority: Priority::Urgent,
        min_age: ANY_AGE,
        title: "Pre-Reading Skills Need Attention",
        description: "Building pre-literacy skills now prevents reading difficulties later. Children with strong early literacy are 85% more likely to read at grade level.",
        what_this_means: "Your child isn't building the foundation needed for reading success in school.",
        next_steps: "Start Talktu's pre-reading games (free trial available).",
        activities: LITERACY_URGENT_ACTIVITIES,
    },
    Guidance {
        domain: DevelopmentDomain::Literacy,
        priority: Priority::Urgent,
        min_age: 5,
        title: "Reading Support Urgently Needed",
        description: "At age {age}, your child should recognize letters and sounds. Without intervention, they may fall 1-2 years behind peers by Grade 2, affecting all subjects.",
        what_this_means: "Risk of reading difficulties, lower confidence, and academic struggles across all subjects.",
        next_steps: "Book a reading assessment with Talktu (₦5,000). We offer specialized literacy programs.",
        activities: LITERACY_URGENT_ACTIVITIES,
    },
    Guidance {
        domain: DevelopmentDomain::Literacy,
        priority: Priority::NeedsSupport,
        min_age: ANY_AGE,
        title: "Reading Skills Need Strengthening",
        description: "Your child has some literacy skills but needs more practice to become a confident reader. Daily 20-minute reading sessions can improve skills by 40% in 8 weeks.",
        what_this_means: "Your child may read slowly, avoid reading tasks, or struggle with new words.",
        next_steps: "Use Talktu's interactive reading app (₦2,000/month) or book group literacy sessions (₦8,000/month).",
        activities: &[
            "✓ Read aloud 20 min daily (improves fluency & comprehension)",
            "✓ Letter-sound games with household items (phonics)",
            "✓ \"I Spy\" with beginning sounds (sound awareness)",
            "✓ Label items at home (environmental print)",
        ],
    },
    Guidance {
        domain: DevelopmentDomain::Numeracy,
        priority: Priority::Urgent,
        min_age: ANY_AGE,
        title: "Math Skills Need Immediate Support",
        description: "Your child is struggling with basic number concepts expected at age {age}. Early math skills predict future academic success more than reading skills.",
        what_this_means: "Difficulty with counting, quantity, and number recognition will impact all math learning and daily life skills.",
        next_steps: "Book a math readiness assessment (₦4,000). Talktu offers playful math tutoring (₦6,000-12,000/month).",
        activities: &[
            "✓ Count everything daily - stairs, toys, food (builds number sense)",
            "✓ Compare quantities: more/less/same (critical math concept)",
            "✓ Sorting games by color/size (categorization skills)",
            "✓ Number songs & finger counting (makes math fun)",
        ],
    },
    Guidance {
        domain: DevelopmentDomain::Numeracy,
        priority: Priority::NeedsSupport,
        min_age: ANY_AGE,
        title: "Build Stronger Number Skills",
        description: "Your child understands basic numbers but needs more practice for confidence. Daily number activities make math feel natural and fun.",
        what_this_means: "Your child may count incorrectly, struggle with simple addition, or avoid number tasks.",
        next_steps: "Try Talktu's number games app (₦1,500/month) or join our math playgroup (₦10,000/month, 4 kids max).",
        activities: &[
            "✓ Count objects up to 20 together (strengthens counting)",
            "✓ Number recognition games 1-10 (visual-number connection)",
            "✓ Simple addition with toys/snacks (makes math concrete)",
            "✓ Cooking & building projects (practical math skills)",
        ],
    },
    Guidance {
        domain: DevelopmentDomain::Cognitive,
        priority: Priority::Urgent,
        min_age: ANY_AGE,
        title: "Attention & Focus Need Professional Evaluation",
        description: "Short attention span at age {age} may indicate underlying issues. Early assessment can identify ADHD, sensory processing issues, or other needs requiring specialized support.",
        what_this_means: "Your child may have tantrums, difficulty following instructions, forget tasks, or struggle in structured environments like school.",
        next_steps: "Book a developmental assessment with Talktu's child psychologist (₦8,000). We also offer parent coaching (₦5,000/session).",
        activities: &[
            "✓ Very short activities (2-3 min) with praise (builds stamina)",
            "✓ Memory games with 2-3 items (strengthens working memory)",
            "✓ Visual schedules with pictures (reduces anxiety)",
            "✓ Calm environment during tasks (minimizes distractions)",
        ],
    },
    Guidance {
        domain: DevelopmentDomain::Cognitive,
        priority: Priority::NeedsSupport,
        min_age: ANY_AGE,
        title: "Strengthen Focus & Self-Control",
        description: "Your child has short attention span typical for age but can benefit from activities that build focus gradually. Most children show 50% improvement in 6-8 weeks.",
        what_this_means: "Your child may lose interest quickly, have trouble waiting, or need many reminders to complete tasks.",
        next_steps: "Try Talktu's attention-building games (₦2,000/month) or book a focus skills workshop (₦7,000 one-time).",
        activities: &[
            "✓ Simple puzzles 5-10 min daily (builds sustained attention)",
            "✓ Memory games starting with 3 items (working memory)",
            "✓ Finish one task before starting another (task completion)",
            "✓ Turn-taking games (impulse control & patience)",
        ],
    },
];

const LITERACY_URGENT_ACTIVITIES: &[&str] = &[
    "✓ Daily alphabet practice - 10 min (letter recognition)",
    "✓ Rhyming games during car rides (phonemic awareness)",
    "✓ Point to words while reading (print awareness)",
    "✓ Letter tracing with sand/play-doh (motor + visual)",
];
