//! Sample poems for bootstrapping an empty database.

use crate::error::StoreError;
use crate::models::poem::{CreatePoem, PoemFilter};
use crate::repositories::PoemStore;

fn poem(
    title: &str,
    author: &str,
    dynasty: &str,
    content: &str,
    translation: &str,
    notes: &str,
    tags: &str,
) -> CreatePoem {
    CreatePoem {
        title: title.to_string(),
        author: author.to_string(),
        dynasty: dynasty.to_string(),
        content: content.to_string(),
        translation: Some(translation.to_string()),
        notes: Some(notes.to_string()),
        tags: Some(tags.to_string()),
    }
}

/// The fixed sample set loaded by `poetry-seed`.
pub fn sample_poems() -> Vec<CreatePoem> {
    vec![
        poem(
            "静夜思",
            "李白",
            "唐",
            "床前明月光，疑是地上霜。举头望明月，低头思故乡。",
            "明亮的月光洒在床前的窗户纸上，好像地上泛起了一层霜。我禁不住抬起头来，看那天窗外空中的一轮明月，不由得低头沉思，想起远方的家乡。",
            "这是一首写远客思乡之情的诗。",
            "思乡,月亮,夜晚,李白",
        ),
        poem(
            "春晓",
            "孟浩然",
            "唐",
            "春眠不觉晓，处处闻啼鸟。夜来风雨声，花落知多少。",
            "春天睡醒不觉天已大亮，到处可以听见小鸟的鸣叫声。回想昨夜的阵阵风雨声，吹落了多少花儿。",
            "诗人隐居鹿门山时所作。",
            "春天,鸟鸣,风雨,花落",
        ),
        poem(
            "登鹳雀楼",
            "王之涣",
            "唐",
            "白日依山尽，黄河入海流。欲穷千里目，更上一层楼。",
            "太阳依傍山峦沉落，黄河向着大海滔滔东流。如果要想看千里的风光，那就要登上更高的一层城楼。",
            "登高望远，表现出不凡的胸襟抱负。",
            "登高,黄河,进取,哲理",
        ),
        poem(
            "悯农",
            "李绅",
            "唐",
            "锄禾日当午，汗滴禾下土。谁知盘中餐，粒粒皆辛苦。",
            "盛夏中午，烈日炎炎，农民还在劳作，汗珠滴入泥土。有谁想到，我们碗中的米饭，粒粒饱含着农民的血汗？",
            "反映了农民的生存状态。",
            "农民,劳动,粮食,珍惜",
        ),
        poem(
            "望庐山瀑布",
            "李白",
            "唐",
            "日照香炉生紫烟，遥看瀑布挂前川。飞流直下三千尺，疑是银河落九天。",
            "香炉峰在阳光的照射下生起紫色烟霞，远远望见瀑布似白色绢绸悬挂在山前。",
            "运用了比喻、夸张和想象，构思奇特。",
            "瀑布,庐山,李白,壮观",
        ),
        poem(
            "水调歌头·明月几时有",
            "苏轼",
            "宋",
            "明月几时有？把酒问青天。不知天上宫阙，今夕是何年。",
            "明月从什么时候开始有的？我拿着酒杯遥问苍天。",
            "中秋之夜怀念弟弟苏辙所作。",
            "中秋,月亮,思念,苏轼",
        ),
        poem(
            "声声慢·寻寻觅觅",
            "李清照",
            "宋",
            "寻寻觅觅，冷冷清清，凄凄惨惨戚戚。",
            "苦苦地寻寻觅觅，却只见冷冷清清，怎不让人凄惨悲戚。",
            "南渡之后的作品，叠字运用精妙。",
            "婉约,愁绪,李清照",
        ),
    ]
}

/// Insert [`sample_poems`] when the table is empty.
///
/// Returns the number of rows inserted (zero if data already existed).
pub async fn seed_if_empty(store: &PoemStore) -> Result<usize, StoreError> {
    let existing = store.count(&PoemFilter::default()).await?;
    if existing > 0 {
        tracing::info!(existing, "Poems table already populated, skipping seed");
        return Ok(0);
    }

    let poems = sample_poems();
    for input in &poems {
        let id = store.create(input).await?;
        tracing::debug!(id, title = %input.title, "Seeded poem");
    }
    Ok(poems.len())
}
