use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use draughts::Response;
use serde::Serialize;
use serde_json::Value;

/// Writes the requests and responses of each game into a numbered JSON file.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    exchanges: Vec<Exchange>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            exchanges: Vec::new(),
        })
    }

    /// Remembers one request line and the response to it.
    ///
    /// Lines that aren't valid JSON are kept as strings.
    pub fn store_exchange(
        &mut self,
        request: &str,
        response: Option<&Response>,
    ) -> anyhow::Result<()> {
        let request =
            serde_json::from_str(request).unwrap_or_else(|_| Value::String(String::from(request)));
        let response = response.map(serde_json::to_value).transpose()?;
        self.exchanges.push(Exchange { request, response });
        Ok(())
    }

    /// Writes everything stored since the last call into the next file.
    ///
    /// Does nothing if nothing was stored.
    pub fn write_game_recording(&mut self) -> anyhow::Result<Option<PathBuf>> {
        if self.exchanges.is_empty() {
            return Ok(None);
        }
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(writer, &std::mem::take(&mut self.exchanges))?;
        self.num += 1;
        Ok(Some(filepath))
    }
}

#[derive(Serialize)]
struct Exchange {
    request: Value,
    /// Missing for requests that get no response.
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<Value>,
}
