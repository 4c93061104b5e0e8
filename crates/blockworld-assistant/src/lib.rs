//! Conversational building assistant for the blockworld sandbox
//!
//! The assistant is an external collaborator behind a single contract:
//! `ask(question) -> answer`. Common questions are answered locally from a
//! canned keyword table; everything else goes to a text-completion backend
//! over a line-delimited JSON TCP connection (one request line, one response
//! line). Every failure is recoverable — callers surface `retry_message()`
//! to the player and carry on.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::{Duration, timeout};

/// User-facing text shown when a question could not be answered
pub const RETRY_MESSAGE: &str =
    "Sorry, I had trouble processing your question. Please try again.";

/// How long to wait for a backend response
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(30);

/// System prompt sent with every backend request
pub const SYSTEM_PROMPT: &str = "\
You are a helpful AI assistant for a block building game with an infinite \
procedurally generated world.

Your role is to help players with:
- Building tips and techniques using the expanded block palette
- Creative building ideas for different biomes
- Exploration strategies for the infinite world
- Information about block types and their properties

Available blocks: Grass, Stone, Wood, Sand, Water, Dirt, Coal Ore, Iron Ore, \
Gold Ore, Diamond Ore, Lava, Ice, Snow, Leaves, Obsidian

Biomes in the world: Plains, Forest, Desert, Mountains, Ocean

Block properties:
- Transparent blocks: Water, Ice, Leaves
- Glowing blocks: Lava
- Rare ores: Diamond (deepest), Gold, Iron, Coal (underground)

Keep responses brief, friendly, and focused on building/exploration help.";

/// Assistant failure modes. All recoverable: show `retry_message()` and retry.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("backend timed out")]
    Timeout,
}

impl AssistantError {
    /// The message shown to the player for any assistant failure
    pub fn retry_message(&self) -> &'static str {
        RETRY_MESSAGE
    }
}

#[derive(Serialize)]
struct AskRequest<'a> {
    system: &'a str,
    question: &'a str,
}

#[derive(Deserialize)]
struct AskResponse {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Canned answer for frequently asked building questions.
///
/// Checked before any backend round trip; returns None for questions the
/// model should handle.
pub fn common_response(question: &str) -> Option<&'static str> {
    let q = question.to_lowercase();

    if q.contains("castle") {
        return Some(
            "For a castle: use stone blocks for main walls, add wood accents. \
             Build tall towers at corners with snow or ice for winter castles. \
             In mountains, use the terrain for natural defenses!",
        );
    }
    if q.contains("house") {
        return Some(
            "For houses: wood in forests, sand in deserts, stone in mountains. \
             Add water features, use lava for cozy fireplaces, ice for modern windows!",
        );
    }
    if q.contains("tree") {
        return Some(
            "For trees: wood trunk, leaves for canopy. In different biomes: \
             snow-covered in mountains, desert palms with sand, ice trees for winter scenes!",
        );
    }
    if q.contains("bridge") {
        return Some(
            "For bridges: wood over water, stone in mountains, ice for modern looks. \
             Use lava underneath for dramatic lighting effects!",
        );
    }
    if q.contains("biome")
        || q.contains("desert")
        || q.contains("forest")
        || q.contains("mountain")
        || q.contains("ocean")
    {
        return Some(
            "Each biome offers unique opportunities! Desert: sand pyramids, oases. \
             Forest: tree houses, wooden villages. Mountains: stone fortresses, snow \
             castles. Ocean: underwater bases, lighthouses. Plains: open farmland, \
             grand structures!",
        );
    }
    if q.contains("ore")
        || q.contains("diamond")
        || q.contains("gold")
        || q.contains("iron")
        || q.contains("coal")
    {
        return Some(
            "Find ores by digging deep underground! Coal is common, iron and gold are \
             deeper, diamond is deepest and rarest. Use them for special decorative \
             accents - gold for luxury, diamond for magical builds!",
        );
    }
    if q.contains("water") || q.contains("lava") || q.contains("ice") {
        return Some(
            "Special blocks add magic! Water: pools, moats, underwater builds. \
             Lava: lighting, forges, volcanic themes. Ice: modern transparent \
             architecture, winter scenes. All add unique atmosphere!",
        );
    }

    None
}

/// Building suggestion for a palette block name
pub fn building_suggestion(block_name: &str) -> &'static str {
    match block_name {
        "grass" => "Grass blocks are great for nature builds! Try making a garden, park, or the roof of an underground bunker.",
        "stone" => "Stone is perfect for castles, fortresses, and sturdy buildings. Mix with wood for a medieval look.",
        "wood" => "Wood blocks are excellent for cozy houses, bridges, and tree houses.",
        "sand" => "Sand blocks are ideal for desert builds, beaches, or pyramids. Perfect for blending into desert biomes!",
        "water" => "Water blocks create beautiful fountains, pools, and moats! Use them for underwater bases.",
        "dirt" => "Dirt blocks are great for underground builds and natural-looking structures. Mix with grass for realistic terrain.",
        "coal" => "Coal ore blocks add dark accents to builds. Use sparingly for industrial or mine-themed structures.",
        "iron" => "Iron ore blocks provide a metallic gray look, perfect for modern or industrial builds.",
        "gold" => "Gold ore blocks add luxury and shine! Use for treasure rooms, palaces, or decorative accents.",
        "diamond" => "Diamond ore blocks are the most precious! Save for special builds like throne rooms.",
        "lava" => "Lava blocks glow and provide dramatic lighting! Perfect for forges, volcanic builds, or mood lighting.",
        "ice" => "Ice blocks are transparent and cold-looking. Great for winter builds, igloos, or glass-like structures.",
        "snow" => "Snow blocks are perfect for winter scenes, arctic bases, or mountain-top builds.",
        "leaves" => "Leaf blocks are transparent and natural. Use for tree builds, gardens, or organic architecture.",
        "obsidian" => "Obsidian blocks are dark and mysterious. Perfect for gothic builds, portals, or dramatic accents.",
        _ => "Try experimenting with different block combinations to create unique structures in the infinite world!",
    }
}

const BUILDING_TIPS: [&str; 10] = [
    "Mix different block types for more interesting textures and patterns.",
    "Use symmetry for grand buildings, or break it intentionally for a more organic feel.",
    "Add depth to walls by varying the block placement - some blocks in, some out.",
    "Small details like windows, doors, and decorations make buildings come alive.",
    "Start with a simple shape and gradually add complexity as you build.",
    "Use natural terrain features to inspire your building designs.",
    "Lighting with lava blocks can completely change the mood of your structures.",
    "Explore different biomes for unique building opportunities!",
    "Dig deep to find rare ores for special decorative accents.",
    "The infinite world means unlimited space for your creativity!",
];

/// A rotating building tip; callers pass any counter
pub fn building_tip(n: usize) -> &'static str {
    BUILDING_TIPS[n % BUILDING_TIPS.len()]
}

/// Client for the assistant backend.
///
/// Holds a lazily established TCP connection. On transport failure the
/// client reconnects and retries the request once before giving up.
pub struct AssistantClient {
    addr: String,
    stream: Option<TcpStream>,
}

impl AssistantClient {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            stream: None,
        }
    }

    /// Answer a question, preferring the canned table over the backend
    pub async fn ask(&mut self, question: &str) -> Result<String, AssistantError> {
        if let Some(answer) = common_response(question) {
            log::debug!("answered from canned table");
            return Ok(answer.to_string());
        }

        match self.ask_backend(question).await {
            Ok(answer) => Ok(answer),
            Err(AssistantError::Backend(e)) => Err(AssistantError::Backend(e)),
            Err(e) => {
                // Transport trouble: reconnect and retry once
                log::warn!("assistant request failed, reconnecting: {e}");
                self.stream = None;
                self.ask_backend(question).await
            }
        }
    }

    async fn ask_backend(&mut self, question: &str) -> Result<String, AssistantError> {
        if self.stream.is_none() {
            self.stream = Some(TcpStream::connect(&self.addr).await?);
        }
        let stream = self.stream.as_mut().expect("connection established above");

        let request = AskRequest {
            system: SYSTEM_PROMPT,
            question,
        };
        let mut line = serde_json::to_string(&request)
            .map_err(|e| AssistantError::Protocol(e.to_string()))?;
        line.push('\n');
        stream.write_all(line.as_bytes()).await?;
        stream.flush().await?;

        let mut response_line = String::new();
        let read = timeout(
            RESPONSE_TIMEOUT,
            BufReader::new(stream).read_line(&mut response_line),
        )
        .await
        .map_err(|_| AssistantError::Timeout)?;
        if read? == 0 {
            return Err(AssistantError::Protocol("backend closed connection".into()));
        }

        let response: AskResponse = serde_json::from_str(&response_line)
            .map_err(|e| AssistantError::Protocol(e.to_string()))?;
        if let Some(error) = response.error {
            return Err(AssistantError::Backend(error));
        }
        response
            .answer
            .ok_or_else(|| AssistantError::Protocol("response missing answer".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[test]
    fn test_common_response_keywords() {
        assert!(common_response("How do I build a castle?").unwrap().contains("stone"));
        assert!(common_response("ideas for the DESERT biome").is_some());
        assert!(common_response("where do I find diamond?").unwrap().contains("deepest"));
        assert!(common_response("what is the meaning of life").is_none());
    }

    #[test]
    fn test_building_suggestion_fallback() {
        assert!(building_suggestion("lava").contains("glow"));
        assert!(building_suggestion("bedrock").contains("experimenting"));
    }

    #[test]
    fn test_building_tips_cycle() {
        assert_eq!(building_tip(0), building_tip(BUILDING_TIPS.len()));
        assert_ne!(building_tip(0), building_tip(1));
    }

    #[tokio::test]
    async fn test_ask_round_trip() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut line = String::new();
            {
                let mut reader = BufReader::new(&mut socket);
                reader.read_line(&mut line).await.unwrap();
            }
            let request: serde_json::Value = serde_json::from_str(&line).unwrap();
            assert_eq!(request["question"], "any fortress ideas?");
            assert!(request["system"].as_str().unwrap().contains("block building game"));
            socket
                .write_all(b"{\"answer\":\"Build on a mountain ridge!\"}\n")
                .await
                .unwrap();
        });

        let mut client = AssistantClient::new(addr.to_string());
        let answer = client.ask("any fortress ideas?").await.unwrap();
        assert_eq!(answer, "Build on a mountain ridge!");
    }

    #[tokio::test]
    async fn test_backend_error_is_recoverable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut line = String::new();
            {
                let mut reader = BufReader::new(&mut socket);
                reader.read_line(&mut line).await.unwrap();
            }
            socket
                .write_all(b"{\"error\":\"model overloaded\"}\n")
                .await
                .unwrap();
        });

        let mut client = AssistantClient::new(addr.to_string());
        let err = client.ask("any fortress ideas?").await.unwrap_err();
        assert!(matches!(err, AssistantError::Backend(_)));
        assert_eq!(err.retry_message(), RETRY_MESSAGE);
    }

    #[tokio::test]
    async fn test_unreachable_backend_errors() {
        // Port 1 is never listening locally
        let mut client = AssistantClient::new("127.0.0.1:1");
        let err = client.ask("any fortress ideas?").await.unwrap_err();
        assert!(matches!(err, AssistantError::Io(_)));
        assert_eq!(err.retry_message(), RETRY_MESSAGE);
    }

    #[tokio::test]
    async fn test_canned_answer_skips_backend() {
        // No server behind this address; canned questions must still work
        let mut client = AssistantClient::new("127.0.0.1:1");
        let answer = client.ask("How do I build a castle?").await.unwrap();
        assert!(answer.contains("stone"));
    }
}
