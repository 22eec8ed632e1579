//! Built-in question catalog. Loaded once at startup and shared read-only.

use crate::questionnaire::models::{Question, QuestionOption};

fn opt(id: &str, text: &str) -> QuestionOption {
    QuestionOption {
        id: id.to_string(),
        text: text.to_string(),
    }
}

fn question(id: u32, text: &str, description: &str, options: Vec<QuestionOption>) -> Question {
    Question {
        id,
        text: text.to_string(),
        description: Some(description.to_string()),
        options,
        allow_custom: true,
    }
}

/// The ten assessment questions, in presentation order.
pub fn default_questions() -> Vec<Question> {
    vec![
        question(
            1,
            "What subjects do you enjoy the most in school/college?",
            "Select the academic areas that genuinely interest you, even if they're not what you're currently studying.",
            vec![
                opt("math", "Mathematics & Statistics"),
                opt("science", "Science (Physics, Chemistry, Biology)"),
                opt("compsci", "Computer Science & Programming"),
                opt("arts", "Arts & Humanities"),
                opt("social", "Social Sciences"),
                opt("business", "Business & Economics"),
                opt("languages", "Languages & Literature"),
            ],
        ),
        question(
            2,
            "What are your favorite hobbies or activities outside of academics?",
            "These can reveal underlying interests that might translate to career paths.",
            vec![
                opt("tech", "Technology (coding, gaming, electronics)"),
                opt("creative", "Creative pursuits (art, writing, music)"),
                opt("social", "Social activities (organizing events, volunteering)"),
                opt("physical", "Physical activities (sports, fitness, outdoor adventures)"),
                opt("analytical", "Analytical activities (puzzles, chess, strategy games)"),
                opt("making", "Making things (crafts, DIY projects, cooking)"),
            ],
        ),
        question(
            3,
            "How do you prefer to solve problems?",
            "Your problem-solving approach can indicate suitable work styles and environments.",
            vec![
                opt("logical", "Through logical analysis and systematic thinking"),
                opt("creative", "Using creative and innovative approaches"),
                opt("collaborative", "By discussing with others and gathering perspectives"),
                opt("experimental", "Through trial and error and hands-on experimentation"),
                opt("research", "By researching existing solutions and adapting them"),
            ],
        ),
        question(
            4,
            "What kind of work environment do you prefer?",
            "Your ideal work setting can help identify careers with matching environments.",
            vec![
                opt("structured", "Structured with clear guidelines and processes"),
                opt("flexible", "Flexible with room for creativity and innovation"),
                opt("collaborative", "Collaborative with strong team interaction"),
                opt("independent", "Independent where I can work autonomously"),
                opt("dynamic", "Fast-paced and constantly changing"),
                opt("remote", "Remote or location-independent"),
            ],
        ),
        question(
            5,
            "What skills do you think you excel at?",
            "Consider both technical and soft skills you've developed.",
            vec![
                opt("communication", "Communication (writing, speaking, presenting)"),
                opt("technical", "Technical skills (coding, data analysis, engineering)"),
                opt("creative", "Creative skills (design, writing, problem-solving)"),
                opt("analytical", "Analytical thinking and research"),
                opt("leadership", "Leadership and management"),
                opt("interpersonal", "Interpersonal skills and emotional intelligence"),
                opt("organizational", "Organization and attention to detail"),
            ],
        ),
        question(
            6,
            "What type of tasks energize you the most?",
            "Activities that energize rather than drain you are important career indicators.",
            vec![
                opt("mental", "Mental challenges and problem-solving"),
                opt("creative", "Creative expression and innovation"),
                opt("helping", "Helping or teaching others"),
                opt("technical", "Building or making tangible things"),
                opt("organizing", "Organizing and creating systems"),
                opt("analyzing", "Analyzing data and finding patterns"),
                opt("leading", "Leading teams and initiatives"),
            ],
        ),
        question(
            7,
            "How do you handle stress and pressure?",
            "Different careers have different stress profiles - knowing your coping style helps find suitable matches.",
            vec![
                opt("thrive", "I thrive under pressure and tight deadlines"),
                opt("methodical", "I handle stress by breaking tasks into manageable steps"),
                opt("balance", "I need balance and prefer moderate, consistent workloads"),
                opt("adaptive", "I'm adaptable but prefer to avoid consistently high-stress environments"),
                opt("collaborative", "I manage stress best when I can collaborate with others"),
            ],
        ),
        question(
            8,
            "What are your long-term career goals?",
            "Consider what you want to achieve in your professional life.",
            vec![
                opt("expert", "Becoming an expert/authority in my field"),
                opt("leadership", "Reaching leadership or management positions"),
                opt("entrepreneurship", "Starting my own business or working independently"),
                opt("impact", "Making a positive impact on society"),
                opt("worklife", "Achieving good work-life balance"),
                opt("creativity", "Expressing creativity and innovation"),
                opt("financial", "Financial success and stability"),
            ],
        ),
        question(
            9,
            "What industries interest you the most?",
            "You might find your ideal role in an industry you're naturally drawn to.",
            vec![
                opt("tech", "Technology and Software"),
                opt("health", "Healthcare and Medicine"),
                opt("education", "Education and Training"),
                opt("finance", "Finance and Business"),
                opt("creative", "Creative Arts and Media"),
                opt("science", "Science and Research"),
                opt("environment", "Environmental and Sustainability"),
                opt("government", "Government and Public Service"),
            ],
        ),
        question(
            10,
            "What's your preferred way of learning new things?",
            "Your learning style can indicate training approaches and career paths that might suit you best.",
            vec![
                opt("handson", "Hands-on practice and experimentation"),
                opt("visual", "Visual learning through demonstrations and diagrams"),
                opt("reading", "Reading and self-study"),
                opt("discussion", "Discussion and collaborative learning"),
                opt("structured", "Structured courses and formal education"),
                opt("mentorship", "One-on-one mentorship and coaching"),
            ],
        ),
    ]
}
