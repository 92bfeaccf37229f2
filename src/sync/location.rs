// region:    --- Location

/// 탐색 가능한 URL (쿼리 문자열 부분)
pub trait Location {
    /// 현재 쿼리 문자열 ("?" 제외)
    fn query(&self) -> String;

    /// 현재 기록 항목을 교체 (새 기록을 만들지 않음)
    fn replace_query(&mut self, query: &str);

    /// 새 기록 항목 추가
    fn push_query(&mut self, query: &str);
}

/// 메모리 기반 방문 기록
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new(initial_query: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_query.into()],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 뒤로 가기. 이동했으면 true
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// 앞으로 가기. 이동했으면 true
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new("")
    }
}

impl Location for History {
    fn query(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn replace_query(&mut self, query: &str) {
        self.entries[self.cursor] = query.to_string();
    }

    fn push_query(&mut self, query: &str) {
        // 뒤로 간 상태에서 push 하면 앞쪽 기록은 버린다
        self.entries.truncate(self.cursor + 1);
        self.entries.push(query.to_string());
        self.cursor += 1;
    }
}

// endregion: --- Location
