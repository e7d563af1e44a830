//! 行拆分与字号拟合
//!
//! 画布尺寸与缩减步长固定。拟合逻辑与具体测量实现解耦，
//! 测量函数由调用方注入，测试可以替换为软件测量。

/// 模板画布宽度
pub const CANVAS_WIDTH: u32 = 2048;
/// 模板画布高度
pub const CANVAS_HEIGHT: u32 = 512;
/// 行宽上限为画布宽度的 90%
pub const MAX_LINE_WIDTH: f32 = CANVAS_WIDTH as f32 * 0.9;
/// 初始字号为画布高度的 70%
pub const INITIAL_FONT_SIZE: f32 = CANVAS_HEIGHT as f32 * 0.7;
/// 字号下限，保证拟合循环终止
pub const MIN_FONT_SIZE: f32 = 10.0;
/// 每轮缩减的字号步长
pub const FONT_SIZE_STEP: f32 = 10.0;

/// 拆分绘制行：单行模式下换行折叠为空格
pub fn split_lines(text: &str, single_line: bool) -> Vec<String> {
    if single_line {
        vec![text.replace('\n', " ")]
    } else {
        text.split('\n').map(str::to_string).collect()
    }
}

/// 从初始字号逐步缩减，直到所有行宽不超过上限或到达字号下限
///
/// 到达下限后接受溢出，不再做进一步处理。
pub fn fit_font_size(lines: &[String], mut measure: impl FnMut(&str, f32) -> f32) -> f32 {
    let mut font_size = INITIAL_FONT_SIZE;
    loop {
        let overflow = lines.iter().any(|line| measure(line, font_size) > MAX_LINE_WIDTH);
        if !overflow || font_size <= MIN_FONT_SIZE {
            return font_size;
        }
        font_size -= FONT_SIZE_STEP;
    }
}

/// 各行中心的纵坐标：块高 = 行数 × 字号，整体垂直居中
pub fn line_centers(line_count: usize, font_size: f32) -> Vec<f32> {
    let total_height = line_count as f32 * font_size;
    let start_y = CANVAS_HEIGHT as f32 / 2.0 - total_height / 2.0 + font_size / 2.0;
    (0..line_count)
        .map(|i| start_y + i as f32 * font_size)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 软件测量：宽度与字符数和字号成正比
    fn fake_measure(line: &str, size: f32) -> f32 {
        line.chars().count() as f32 * size * 0.6
    }

    #[test]
    fn test_split_lines_modes() {
        assert_eq!(split_lines("a\nb", false), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb", true), vec!["a b"]);
        assert_eq!(split_lines("abc", false), vec!["abc"]);
    }

    #[test]
    fn test_short_text_keeps_initial_size() {
        let lines = split_lines("Hi", false);
        let size = fit_font_size(&lines, fake_measure);
        assert_eq!(size, INITIAL_FONT_SIZE);
    }

    #[test]
    fn test_fitted_lines_never_overflow() {
        let lines = split_lines("这是一段比较长的测试文字内容", false);
        let size = fit_font_size(&lines, fake_measure);
        assert!(size < INITIAL_FONT_SIZE);
        for line in &lines {
            assert!(fake_measure(line, size) <= MAX_LINE_WIDTH);
        }
    }

    #[test]
    fn test_extreme_text_terminates_at_floor() {
        let long = "字".repeat(10_000);
        let lines = split_lines(&long, false);
        let size = fit_font_size(&lines, fake_measure);
        // 到达下限后接受溢出
        assert!(size <= MIN_FONT_SIZE);
        assert!(size > 0.0);
    }

    #[test]
    fn test_line_centers_single_line() {
        let centers = line_centers(1, 100.0);
        assert_eq!(centers, vec![CANVAS_HEIGHT as f32 / 2.0]);
    }

    #[test]
    fn test_line_centers_stacking() {
        let centers = line_centers(3, 100.0);
        assert_eq!(centers.len(), 3);
        // 相邻行间距等于字号
        assert_eq!(centers[1] - centers[0], 100.0);
        assert_eq!(centers[2] - centers[1], 100.0);
        // 整块垂直居中
        let mid = (centers[0] + centers[2]) / 2.0;
        assert_eq!(mid, CANVAS_HEIGHT as f32 / 2.0);
    }
}
