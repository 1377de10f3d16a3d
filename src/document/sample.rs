// src/document/sample.rs
//
// Placeholder-content generator. Produces the randomized initial document and
// turns imported plain text into rows, mixing real sentences with placeholder
// text in a chessboard pattern (even row index: opinion column gets real text,
// odd: suggestion column). Cosmetic content policy, not a parser.

use super::definitions::TableRow;

const UNITS: &[&str] = &[
    "华为技术有限公司",
    "北京小米机器人技术有限公司",
    "优必选科技",
    "达闼机器人",
    "宇树科技",
    "之江实验室",
    "中国科学院自动化研究所",
    "科大讯飞股份有限公司",
    "追觅科技",
    "傅利叶智能",
    "乐聚机器人",
    "智元机器人",
    "国家机器人检测与评定中心",
    "深圳市人工智能行业协会",
    "上海交通大学",
    "哈尔滨工业大学",
    "普渡科技",
    "擎朗智能",
    "海康威视",
    "云迹科技",
    "极智嘉",
    "灵动科技",
    "九号公司",
    "天智航",
    "博实股份",
    "新松机器人",
    "埃斯顿自动化",
    "汇川技术",
    "美的集团",
    "格力电器",
];

const HANDLING_OPINIONS: &[&str] = &[
    "采纳",
    "采纳",
    "采纳",
    "采纳",
    "部分采纳",
    "部分采纳",
    "修改后采纳",
    "不采纳",
    "留作参考",
    "解释后维持原样",
    "建议在下个版本考虑",
    "提交工作组讨论",
    "采纳",
    "采纳",
    "需进一步验证",
];

const REMARKS: &[&str] = &[
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "",
    "需核实数据",
    "见会议纪要",
    "参考IEC标准",
    "一致性修改",
    "待定",
    "术语统一",
    "格式调整",
    "",
];

const DUMMY_OPINIONS: &[&str] = &[
    "建议明确“人形机器人”的具体定义，区分于普通双足机器人。",
    "4.2节中关于电池续航的测试条件描述不够具体，建议补充环境温度要求。",
    "“视觉感知”一词范围过大，建议细化为“深度视觉”和“RGB视觉”。",
    "图3中的坐标系标注方向与国际通用标准（ISO 8855）不一致，易造成混淆。",
    "5.1条目中的响应时间指标（<100ms）对于消费级产品过于严苛，建议放宽至200ms。",
    "建议增加关于数据安全和隐私保护的独立章节。",
    "文中多次出现的“力控”术语不统一，部分章节使用了“力矩控制”，建议统一。",
    "6.3.1 跌倒检测的准确率指标缺乏具体的测试数据集说明。",
    "建议删除关于具体芯片型号的推荐，保持标准的通用性。",
    "附录A中的算法流程图逻辑存在死循环风险，请重新核对。",
    "“自主导航”在室内复杂环境下的定义需要补充动态障碍物的场景。",
    "7.2 节的电磁兼容性（EMC）标准引用已过时，建议更新为GB/T 17626系列。",
    "建议对“行走速度”分档进行说明，区分“慢速”、“常速”和“快速”。",
    "表4中的负载能力单位标注错误，应为kg而非N。",
    "3.5 术语“本体感觉”定义晦涩，建议参照生物学定义简化。",
    "建议增加对机器人外壳材料阻燃等级的要求。",
    "8.1 远程控制的通信延迟要求未考虑网络抖动情况。",
    "建议补充关于机械臂末端执行器的通用接口标准。",
    "“人机交互”部分缺乏对语音识别抗噪能力的量化指标。",
    "5.4 节关于关节自由度（DOF）的计算方法有误，未包含手部自由度。",
    "建议引用最新发布的机器人操作系统（ROS 2）相关接口规范。",
    "文中关于“云端大脑”的描述过于理想化，建议增加离线运行的最低功能要求。",
    "9.2 包装运输测试标准建议增加跌落测试的高度分级。",
    "建议统一全文的单位符号，如“秒”统一用“s”，“小时”统一用“h”。",
    "4.5 节散热设计要求中，未考虑高温高湿环境下的降额使用。",
    "建议增加对机器人工作噪音的限制标准（如<60dB）。",
    "“情感计算”章节缺乏理论依据，建议作为资料性附录而非规范性内容。",
    "6.1 视觉传感器的分辨率要求应区分导航相机和交互相机。",
    "建议明确紧急停止按钮的物理位置和颜色规范。",
    "3.2 缩略语表中遗漏了“IMU”（惯性测量单元）的解释。",
    "建议补充机器人充电接口的防触电保护措施。",
    "5.2 节步态规划算法的稳定性判据建议采用ZMP（零力矩点）理论。",
    "建议增加对开源软件许可证合规性的说明。",
];

const DUMMY_SUGGESTIONS: &[&str] = &[
    "修改为：“本标准所称人形机器人，是指具有类人躯干、双足行走能力及双臂操作能力的智能机器人。”",
    "建议补充：“测试环境温度应控制在 25±2℃，相对湿度 40%-60%。”",
    "建议将“视觉感知”修改为“环境感知系统”，并下设子条款描述不同传感器。",
    "请参照ISO 8855标准重新绘制图3，确保X轴指向前方，Z轴垂直向上。",
    "建议修改为：“在典型应用场景下，系统端到端响应时间宜小于200ms。”",
    "新增第10章“安全与隐私”，明确用户数据的采集、存储和传输规范。",
    "全文统一替换为“力矩控制（Torque Control）”。",
    "建议注明：“测试应基于公开数据集（如Fall-1k）或经CNAS认证的第三方测试集。”",
    "删除具体的硬件选型描述，改为描述性能指标要求。",
    "请修改流程图，增加判定节点的“否”分支回路。",
    "建议补充：“在包含人流密度大于0.5人/m²的动态场景下...”。",
    "将引用标准更新为 GB/T 17626.4-2018。",
    "建议增加定义：慢速（<0.5m/s）、常速（0.5-1.5m/s）、快速（>1.5m/s）。",
    "请将表4第3列单位修正为“kg”，并核对数值。",
    "修改定义为：“本体感觉是指机器人感知自身关节位置、速度及受力状态的能力。”",
    "增加：“外壳材料应符合UL94 V-0阻燃等级。”",
    "建议补充：“在5%丢包率网络环境下，控制指令到达率应大于95%。”",
    "建议增加附录B：机械臂末端法兰接口尺寸图。",
    "建议增加指标：“在90dB环境噪声下，唤醒率应大于95%。”",
    "请核对计算公式，建议明确自由度统计范围是否包含末端执行器。",
    "建议参考IEEE 1872-2015机器人本体论标准。",
    "建议增加条款：“在断网模式下，机器人应保持基本的避障和运动控制能力。”",
    "建议依据产品重量分级，20kg以上产品跌落测试高度定为76cm。",
    "请使用Word通配符功能批量替换全文单位符号。",
    "建议补充：“在环境温度超过40℃时，设备应具备自动降频保护功能。”",
    "修改为：“在距离机器人1米处测量，工作噪音不应超过55dB(A)。”",
    "建议将第8章内容整体移至附录C（资料性附录）。",
    "建议改为：“导航相机分辨率不低于720p，交互相机分辨率不低于1080p。”",
    "建议强制要求：“急停按钮应位于肩部或背部易触达位置，并采用红色蘑菇头设计。”",
    "在3.2节补充：IMU - Inertial Measurement Unit (惯性测量单元)。",
    "增加：“充电触点应具备IPX4以上防水等级，并设计防短路机制。”",
    "建议修改判定标准，增加对摩擦锥约束的考虑。",
    "增加：“涉及开源组件时，应提供完整的软件物料清单（SBOM）。”",
];

/// Number of rows in a freshly generated document.
const INITIAL_ROW_COUNT: usize = 35;
/// Minimum row count after a text import, so the page always looks populated.
const MIN_IMPORT_ROWS: usize = 30;

fn pick(values: &'static [&'static str]) -> &'static str {
    values[(rand::random::<u64>() as usize) % values.len()]
}

fn maybe_remark(probability: f64) -> String {
    if rand::random::<f64>() < probability {
        pick(REMARKS).to_string()
    } else {
        String::new()
    }
}

/// Clause numbers are deterministic: sections of five starting at section 4.
pub fn clause_number(index: usize) -> String {
    let section = index / 5 + 4;
    let sub = index % 5 + 1;
    format!("{}.{}", section, sub)
}

/// Generates the randomized initial document (35 rows, placeholder text in
/// every column).
pub fn generate_initial_rows() -> Vec<TableRow> {
    (0..INITIAL_ROW_COUNT)
        .map(|i| TableRow {
            id: (i + 1) as u32,
            serial_number: (i + 1) as u32,
            clause_number: clause_number(i),
            opinion_content: pick(DUMMY_OPINIONS).to_string(),
            modification_suggestion: pick(DUMMY_SUGGESTIONS).to_string(),
            proposing_unit: pick(UNITS).to_string(),
            handling_opinion: pick(HANDLING_OPINIONS).to_string(),
            remarks: maybe_remark(0.3),
        })
        .collect()
}

fn is_terminator(c: char) -> bool {
    matches!(c, '。' | '！' | '？' | '.' | '!' | '?' | '\n')
}

/// Splits text into sentence-like pieces on runs of sentence terminators
/// (Chinese and English variants) or newlines, keeping the terminator run
/// attached to its sentence. Pieces without any visible non-terminator
/// content are dropped.
fn split_sentences(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    let mut sentences = Vec::new();
    let mut buf = String::new();
    let mut chars = normalized.chars().peekable();

    let flush = |buf: &mut String, sentences: &mut Vec<String>| {
        if buf
            .chars()
            .any(|c| !is_terminator(c) && !c.is_whitespace())
        {
            sentences.push(std::mem::take(buf));
        } else {
            buf.clear();
        }
    };

    while let Some(c) = chars.next() {
        buf.push(c);
        if is_terminator(c) {
            while let Some(&next) = chars.peek() {
                if is_terminator(next) {
                    buf.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            flush(&mut buf, &mut sentences);
        }
    }
    flush(&mut buf, &mut sentences);
    sentences
}

/// Groups 1–2 consecutive sentences per chunk, at random.
fn group_chunks(sentences: Vec<String>) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut idx = 0;
    while idx < sentences.len() {
        let take = (rand::random::<u64>() % 2 + 1) as usize;
        let mut chunk = String::new();
        for _ in 0..take {
            if idx >= sentences.len() {
                break;
            }
            chunk.push_str(&sentences[idx]);
            idx += 1;
        }
        chunks.push(chunk.trim().to_string());
    }
    chunks
}

/// Turns imported plain text into at least [`MIN_IMPORT_ROWS`] rows.
///
/// Chessboard mixing: on even row indices the opinion column receives the
/// real chunk and the suggestion column placeholder text; odd indices swap
/// the two. Once real chunks run out, placeholder text fills the remainder.
pub fn parse_text_to_rows(text: &str) -> Vec<TableRow> {
    let chunks = group_chunks(split_sentences(text));
    let total = chunks.len().max(MIN_IMPORT_ROWS);

    (0..total)
        .map(|i| {
            let real = chunks.get(i).cloned();
            let (opinion, suggestion) = if i % 2 == 0 {
                (
                    real.unwrap_or_else(|| pick(DUMMY_OPINIONS).to_string()),
                    pick(DUMMY_SUGGESTIONS).to_string(),
                )
            } else {
                (
                    pick(DUMMY_OPINIONS).to_string(),
                    real.unwrap_or_else(|| pick(DUMMY_SUGGESTIONS).to_string()),
                )
            };
            TableRow {
                id: (i + 1) as u32,
                serial_number: (i + 1) as u32,
                clause_number: clause_number(i),
                opinion_content: opinion,
                modification_suggestion: suggestion,
                proposing_unit: pick(UNITS).to_string(),
                handling_opinion: pick(HANDLING_OPINIONS).to_string(),
                remarks: maybe_remark(0.2),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_numbers_start_at_section_four_in_groups_of_five() {
        assert_eq!(clause_number(0), "4.1");
        assert_eq!(clause_number(4), "4.5");
        assert_eq!(clause_number(5), "5.1");
        assert_eq!(clause_number(12), "6.3");
    }

    #[test]
    fn initial_document_has_35_sequential_rows() {
        let rows = generate_initial_rows();
        assert_eq!(rows.len(), 35);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.id, (i + 1) as u32);
            assert_eq!(row.serial_number, row.id);
            assert_eq!(row.clause_number, clause_number(i));
            assert!(!row.opinion_content.is_empty());
            assert!(!row.modification_suggestion.is_empty());
        }
    }

    #[test]
    fn split_keeps_terminators_and_drops_empty_pieces() {
        let sentences = split_sentences("第一句。。第二句！\n\nthird?");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "第一句。。");
        assert_eq!(sentences[1], "第二句！\n\n");
    }

    #[test]
    fn import_without_punctuation_still_yields_minimum_rows() {
        let rows = parse_text_to_rows("只有一句话没有任何结束标点");
        assert_eq!(rows.len(), 30);
        // The single chunk lands in row 0's opinion column.
        assert!(rows[0].opinion_content.contains("只有一句话"));
    }

    #[test]
    fn empty_import_is_all_placeholder() {
        let rows = parse_text_to_rows("");
        assert_eq!(rows.len(), 30);
        assert!(rows.iter().all(|r| !r.opinion_content.is_empty()));
    }

    #[test]
    fn chessboard_parity_places_real_text_by_row_index() {
        // A marker no placeholder corpus contains.
        let text = (1..=40)
            .map(|i| format!("ZETA语句{}。", i))
            .collect::<String>();
        let rows = parse_text_to_rows(&text);
        assert!(rows.len() >= 30);

        let mut marker_rows = 0;
        for (i, row) in rows.iter().enumerate() {
            if row.opinion_content.contains("ZETA") {
                assert_eq!(i % 2, 0, "real text in opinion column on odd row {}", i);
                marker_rows += 1;
            }
            if row.modification_suggestion.contains("ZETA") {
                assert_eq!(i % 2, 1, "real text in suggestion column on even row {}", i);
                marker_rows += 1;
            }
        }
        assert!(marker_rows > 0);
    }

    #[test]
    fn import_rows_are_sequentially_numbered() {
        let rows = parse_text_to_rows("一。二。三。");
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.id, (i + 1) as u32);
            assert_eq!(row.serial_number, row.id);
        }
    }
}
