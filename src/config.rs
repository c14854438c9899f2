static DEFAULT_CHUNK_SIZE: usize = 10;
static DEFAULT_MAX_WORD_LEN: usize = 50;
static DEFAULT_MAX_LINES: usize = 2000;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Config {
    chunk_size: usize,
    workers: usize,
    max_word_len: usize,
    max_lines: usize,
}

impl Config {
    #[inline]
    pub fn new() -> Config {
        Config::new_with_params(DEFAULT_CHUNK_SIZE, 0)
    }

    /// `workers == 0` shares the global rayon pool instead of building one.
    pub fn new_with_params(chunk_size: usize, workers: usize) -> Config {
        Config {
            chunk_size: normalize_at_least_one("chunk size", chunk_size),
            workers,
            max_word_len: DEFAULT_MAX_WORD_LEN,
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

pub trait SpellerConfig {
    fn set_chunk_size(&mut self, chunk_size: usize);
    fn get_chunk_size(&self) -> usize;
    fn set_workers(&mut self, workers: usize);
    fn get_workers(&self) -> usize;
    fn set_max_word_len(&mut self, max_word_len: usize);
    fn get_max_word_len(&self) -> usize;
    fn set_max_lines(&mut self, max_lines: usize);
    fn get_max_lines(&self) -> usize;
}

impl SpellerConfig for Config {
    fn set_chunk_size(&mut self, chunk_size: usize) {
        self.chunk_size = normalize_at_least_one("chunk size", chunk_size);
    }

    #[inline]
    fn get_chunk_size(&self) -> usize {
        self.chunk_size
    }

    #[inline]
    fn set_workers(&mut self, workers: usize) {
        self.workers = workers;
    }

    #[inline]
    fn get_workers(&self) -> usize {
        self.workers
    }

    fn set_max_word_len(&mut self, max_word_len: usize) {
        self.max_word_len = normalize_at_least_one("max word length", max_word_len);
    }

    #[inline]
    fn get_max_word_len(&self) -> usize {
        self.max_word_len
    }

    #[inline]
    fn set_max_lines(&mut self, max_lines: usize) {
        self.max_lines = max_lines;
    }

    #[inline]
    fn get_max_lines(&self) -> usize {
        self.max_lines
    }
}

fn normalize_at_least_one(name: &str, value: usize) -> usize {
    if value < 1 {
        log::warn!("Only support {} greater or equal to 1.", name);
        1
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.get_chunk_size(), 10);
        assert_eq!(config.get_workers(), 0);
        assert_eq!(config.get_max_word_len(), 50);
        assert_eq!(config.get_max_lines(), 2000);
    }

    #[test]
    fn clamps_to_one() {
        let mut config = Config::new_with_params(0, 4);
        assert_eq!(config.get_chunk_size(), 1);
        assert_eq!(config.get_workers(), 4);

        config.set_max_word_len(0);
        assert_eq!(config.get_max_word_len(), 1);

        config.set_chunk_size(32);
        assert_eq!(config.get_chunk_size(), 32);
    }
}
